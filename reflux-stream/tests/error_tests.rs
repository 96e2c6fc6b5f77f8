// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::ReactiveError;
use reflux_stream::{Flux, Mono};
use reflux_test_utils::{failing_after, InvocationCounter, StepVerifier};

fn counted_failure(counter: &InvocationCounter, values: Vec<i32>) -> Flux<i32> {
    let calls = counter.clone();
    Flux::defer(move || {
        calls.increment();
        failing_after(values.clone(), ReactiveError::source_failure("flaky"))
    })
}

#[tokio::test]
async fn test_on_error_map_wraps_error() {
    // Arrange
    let flux = failing_after(vec![1], ReactiveError::source_failure("catalog"))
        .on_error_map(|error| ReactiveError::wrapped("movie lookup failed", error));

    // Act
    let error = StepVerifier::create(&flux).expect_next(1).verify_error().await;

    // Assert
    assert!(error.is_wrapped());
    assert_eq!(error.to_string(), "movie lookup failed");
    assert!(matches!(error.root_cause(), ReactiveError::SourceFailure { .. }));
}

#[tokio::test]
async fn test_on_error_map_leaves_success_untouched() {
    // Arrange
    let flux = Flux::from_iterable(vec![1, 2])
        .on_error_map(|error| ReactiveError::wrapped("never", error));

    // Act & Assert
    StepVerifier::create(&flux)
        .expect_next_values([1, 2])
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_mono_on_error_map() {
    // Arrange
    let mono: Mono<i32> = Mono::error(ReactiveError::source_failure("down"))
        .on_error_map(|error| ReactiveError::aggregation_failure("movie", error));

    // Act & Assert
    StepVerifier::create(&mono)
        .verify_error_matches(|e| matches!(e, ReactiveError::AggregationFailure { .. }))
        .await;
}

#[tokio::test]
async fn test_retry_subscribes_n_plus_one_times() {
    // Arrange
    let counter = InvocationCounter::new();
    let flux = counted_failure(&counter, vec![]).retry(3);

    // Act
    StepVerifier::create(&flux)
        .verify_error_message("Source failure: flaky")
        .await;

    // Assert
    assert_eq!(counter.count(), 4);
}

#[tokio::test]
async fn test_retry_zero_is_single_attempt() {
    // Arrange
    let counter = InvocationCounter::new();
    let flux = counted_failure(&counter, vec![]).retry(0);

    // Act
    StepVerifier::create(&flux).verify_error().await;

    // Assert
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_retry_replays_values_of_failed_attempts() {
    // Arrange
    let counter = InvocationCounter::new();
    let flux = counted_failure(&counter, vec![1, 2]).retry(1);

    // Act & Assert
    StepVerifier::create(&flux)
        .expect_next_values([1, 2, 1, 2])
        .verify_error()
        .await;
    assert_eq!(counter.count(), 2);
}

#[tokio::test]
async fn test_retry_stops_after_success() {
    // Arrange
    let counter = InvocationCounter::new();
    let calls = counter.clone();
    let flux = Flux::defer(move || {
        if calls.increment() < 3 {
            Flux::error(ReactiveError::source_failure("not yet"))
        } else {
            Flux::from_iterable(vec![42])
        }
    })
    .retry(5);

    // Act
    StepVerifier::create(&flux)
        .expect_next(42)
        .verify_complete()
        .await;

    // Assert
    assert_eq!(counter.count(), 3);
}

#[tokio::test]
async fn test_mono_retry() {
    // Arrange
    let counter = InvocationCounter::new();
    let calls = counter.clone();
    let mono = Mono::defer(move || {
        calls.increment();
        Mono::<i32>::error(ReactiveError::source_failure("down"))
    })
    .retry(2);

    // Act
    StepVerifier::create(&mono).verify_error().await;

    // Assert
    assert_eq!(counter.count(), 3);
}

#[tokio::test]
async fn test_retry_then_on_error_map_sees_last_error() {
    // Arrange
    let counter = InvocationCounter::new();
    let flux = counted_failure(&counter, vec![])
        .retry(2)
        .on_error_map(|error| ReactiveError::wrapped("gave up", error));

    // Act
    let error = StepVerifier::create(&flux).verify_error().await;

    // Assert
    assert_eq!(error.to_string(), "gave up");
    assert_eq!(counter.count(), 3);
}
