// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use reflux_core::{ReactiveError, StreamItem};
use reflux_test_utils::{assert_completes_within, assert_silent_for, InvocationCounter};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_assert_silent_for_pending_stream() {
    let mut silent = stream::pending::<StreamItem<i32>>();

    assert_silent_for(&mut silent, Duration::from_millis(100)).await;
}

#[tokio::test]
#[should_panic = "expected no signal"]
async fn test_assert_silent_for_panics_on_error_signal() {
    let mut failing = stream::iter(vec![StreamItem::<i32>::Error(ReactiveError::source_failure(
        "down",
    ))]);

    assert_silent_for(&mut failing, Duration::from_millis(100)).await;
}

#[tokio::test]
async fn test_assert_completes_within_empty_stream() {
    let mut empty = stream::empty::<StreamItem<i32>>();

    assert_completes_within(&mut empty, Duration::from_millis(100)).await;
}

#[tokio::test(start_paused = true)]
#[should_panic = "no completion within 100ms"]
async fn test_assert_completes_within_timeout() {
    let mut silent = stream::pending::<StreamItem<i32>>();

    assert_completes_within(&mut silent, Duration::from_millis(100)).await;
}

#[tokio::test]
#[should_panic = "expected completion, got Some(Value(1))"]
async fn test_assert_completes_within_with_value() {
    let mut ready = stream::iter(vec![StreamItem::Value(1)]);

    assert_completes_within(&mut ready, Duration::from_millis(100)).await;
}

#[test]
fn test_invocation_counter_shared_between_clones() {
    let counter = InvocationCounter::new();
    let clone = counter.clone();

    assert_eq!(clone.increment(), 1);
    assert_eq!(counter.increment(), 2);
    assert_eq!(clone.count(), 2);
}
