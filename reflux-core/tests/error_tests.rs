// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{ReactiveError, ResultExt};
use std::error::Error;

#[test]
fn test_source_failure_display() {
    let err = ReactiveError::source_failure("movie catalog offline");
    assert_eq!(err.to_string(), "Source failure: movie catalog offline");
}

#[test]
fn test_wrapped_failure_keeps_source() {
    // Arrange
    let original = ReactiveError::source_failure("Review service error");

    // Act
    let wrapped = ReactiveError::wrapped("movie aggregation failed", original);

    // Assert
    assert!(wrapped.is_wrapped());
    assert_eq!(wrapped.to_string(), "movie aggregation failed");
    let source = wrapped.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Source failure: Review service error"));
}

#[test]
fn test_root_cause_walks_nested_chain() {
    let root = ReactiveError::source_failure("reviews unavailable");
    let aggregated = ReactiveError::aggregation_failure("movie 1", root);
    let wrapped = ReactiveError::wrapped("outer", aggregated);

    assert!(matches!(
        wrapped.root_cause(),
        ReactiveError::SourceFailure { context } if context == "reviews unavailable"
    ));
}

#[test]
fn test_root_cause_of_plain_error_is_itself() {
    let err = ReactiveError::transform_failure("bad value");
    assert!(matches!(
        err.root_cause(),
        ReactiveError::TransformFailure { .. }
    ));
}

#[test]
fn test_clone_shares_nested_source() {
    let wrapped = ReactiveError::wrapped("ctx", ReactiveError::source_failure("inner"));
    let cloned = wrapped.clone();
    assert_eq!(wrapped.to_string(), cloned.to_string());
    assert_eq!(
        wrapped.root_cause().to_string(),
        cloned.root_cause().to_string()
    );
}

#[test]
fn test_user_error_wraps_foreign_error() {
    let err = ReactiveError::user_error(std::io::Error::other("disk"));
    assert!(matches!(err, ReactiveError::UserError(_)));
    assert!(err.to_string().contains("disk"));
}

#[test]
fn test_from_user_errors_counts() {
    let err = ReactiveError::from_user_errors(vec![
        std::io::Error::other("a"),
        std::io::Error::other("b"),
        std::io::Error::other("c"),
    ]);
    assert!(matches!(err, ReactiveError::MultipleErrors { count: 3, .. }));
}

#[test]
fn test_result_ext_context_produces_transform_failure() {
    let parsed: Result<u32, _> = "abc".parse::<u32>();
    let err = parsed.context("parsing rating").unwrap_err();
    assert!(matches!(err, ReactiveError::TransformFailure { .. }));
    assert!(err.to_string().starts_with("Transform failure: parsing rating"));
}

#[test]
fn test_result_ext_with_context_is_lazy_on_success() {
    let ok: Result<u32, std::num::ParseIntError> = "5".parse();
    let value = ok
        .with_context(|| panic!("context must not be built on success"))
        .unwrap();
    assert_eq!(value, 5);
}
