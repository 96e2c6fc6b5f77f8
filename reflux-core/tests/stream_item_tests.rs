// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{ReactiveError, StreamItem};

#[test]
fn test_stream_item_value_creation() {
    let item: StreamItem<i32> = StreamItem::Value(42);
    assert!(item.is_value());
    assert!(!item.is_error());
}

#[test]
fn test_stream_item_error_creation() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("test error"));
    assert!(!item.is_value());
    assert!(item.is_error());
}

#[test]
fn test_stream_item_ok_discards_error() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("test"));
    assert_eq!(item.ok(), None);
}

#[test]
fn test_stream_item_err_extracts_error() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::transform_failure("bad"));
    assert!(matches!(
        item.err(),
        Some(ReactiveError::TransformFailure { .. })
    ));
}

#[test]
fn test_stream_item_map_transforms_value() {
    let item = StreamItem::Value(5);
    assert_eq!(item.map(|x| x * 2).ok(), Some(10));
}

#[test]
fn test_stream_item_map_propagates_error() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("test"));
    assert!(item.map(|x| x * 2).is_error());
}

#[test]
fn test_stream_item_and_then_can_fail() {
    let item = StreamItem::Value(5);
    let result: StreamItem<i32> =
        item.and_then(|_| StreamItem::Error(ReactiveError::transform_failure("rejected")));
    assert!(result.is_error());
}

#[test]
fn test_stream_item_map_err_leaves_values_alone() {
    let item = StreamItem::Value(7);
    let mapped = item.map_err(|e| ReactiveError::wrapped("never", e));
    assert_eq!(mapped.ok(), Some(7));
}

#[test]
fn test_stream_item_map_err_rewrites_error() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("down"));
    let mapped = item.map_err(|e| ReactiveError::wrapped("movie", e));
    assert!(mapped.err().is_some_and(|e| e.is_wrapped()));
}

#[test]
fn test_errors_are_never_equal() {
    let a: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("x"));
    let b: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("x"));
    assert_ne!(a, b);
}

#[test]
fn test_result_round_trip() {
    let item: StreamItem<i32> = Ok(3).into();
    let result: Result<i32, ReactiveError> = item.into();
    assert_eq!(result.ok(), Some(3));
}

#[test]
#[should_panic(expected = "called `StreamItem::unwrap()` on an `Error` value")]
fn test_unwrap_on_error_panics() {
    let item: StreamItem<i32> = StreamItem::Error(ReactiveError::source_failure("boom"));
    item.unwrap();
}
