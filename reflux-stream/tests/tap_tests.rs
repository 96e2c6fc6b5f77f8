// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_core::ReactiveError;
use reflux_stream::{Flux, Mono};
use reflux_test_utils::{failing_after, StepVerifier};
use std::sync::Arc;

type Journal = Arc<Mutex<Vec<String>>>;

fn record(journal: &Journal, entry: impl Into<String>) {
    journal.lock().push(entry.into());
}

fn hooked(flux: Flux<i32>, journal: &Journal) -> Flux<i32> {
    let (on_sub, on_next, on_error, on_complete) =
        (journal.clone(), journal.clone(), journal.clone(), journal.clone());
    flux.do_on_subscribe(move || record(&on_sub, "subscribe"))
        .do_on_next(move |n| record(&on_next, format!("next {n}")))
        .do_on_error(move |e| record(&on_error, format!("error {e}")))
        .do_on_complete(move || record(&on_complete, "complete"))
}

#[tokio::test]
async fn test_hooks_fire_in_signal_order() {
    // Arrange
    let journal = Journal::default();
    let flux = hooked(Flux::from_iterable(vec![1, 2]), &journal);

    // Act
    StepVerifier::create(&flux)
        .expect_next_values([1, 2])
        .verify_complete()
        .await;

    // Assert
    assert_eq!(
        *journal.lock(),
        vec!["subscribe", "next 1", "next 2", "complete"]
    );
}

#[tokio::test]
async fn test_hooks_on_error_skip_complete() {
    // Arrange
    let journal = Journal::default();
    let flux = hooked(
        failing_after(vec![1], ReactiveError::source_failure("down")),
        &journal,
    );

    // Act
    StepVerifier::create(&flux).expect_next(1).verify_error().await;

    // Assert
    assert_eq!(
        *journal.lock(),
        vec!["subscribe", "next 1", "error Source failure: down"]
    );
}

#[tokio::test]
async fn test_hooks_fire_per_subscription() {
    // Arrange
    let journal = Journal::default();
    let flux = hooked(Flux::just(1), &journal);

    // Act
    StepVerifier::create(&flux).expect_next(1).verify_complete().await;
    StepVerifier::create(&flux).expect_next(1).verify_complete().await;

    // Assert
    assert_eq!(journal.lock().len(), 6);
}

#[tokio::test]
async fn test_hooks_do_not_alter_values() {
    // Arrange
    let journal = Journal::default();
    let flux = hooked(Flux::from_iterable(vec![3, 2, 1]), &journal).log("numbers");

    // Act & Assert
    StepVerifier::create(&flux)
        .expect_next_values([3, 2, 1])
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_upstream_subscribe_hook_fires_first() {
    // Arrange
    let journal = Journal::default();
    let (outer, inner) = (journal.clone(), journal.clone());
    let flux = Flux::just(1)
        .do_on_subscribe(move || record(&inner, "inner"))
        .map(|n| n + 1)
        .do_on_subscribe(move || record(&outer, "outer"));

    // Act
    StepVerifier::create(&flux).expect_next(2).verify_complete().await;

    // Assert
    assert_eq!(*journal.lock(), vec!["inner", "outer"]);
}

#[tokio::test]
async fn test_mono_hooks() {
    // Arrange
    let journal = Journal::default();
    let (on_sub, on_next, on_error) = (journal.clone(), journal.clone(), journal.clone());
    let mono = Mono::just(7)
        .do_on_subscribe(move || record(&on_sub, "subscribe"))
        .do_on_next(move |n| record(&on_next, format!("next {n}")))
        .do_on_error(move |e| record(&on_error, format!("error {e}")))
        .log("seven");

    // Act
    StepVerifier::create(&mono).expect_next(7).verify_complete().await;

    // Assert
    assert_eq!(*journal.lock(), vec!["subscribe", "next 7"]);
}
