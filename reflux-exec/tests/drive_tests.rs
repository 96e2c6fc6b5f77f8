// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use reflux_core::{CancellationToken, ReactiveError};
use reflux_exec::{drive, Subscriber, SubscriptionState};
use reflux_stream::{Flux, Mono};
use reflux_test_utils::failing_after;

#[derive(Default)]
struct Recorder {
    signals: Vec<String>,
}

#[async_trait]
impl Subscriber<i32> for Recorder {
    async fn on_subscribe(&mut self) {
        self.signals.push("subscribe".into());
    }

    async fn on_next(&mut self, value: i32) {
        self.signals.push(format!("next {value}"));
    }

    async fn on_error(&mut self, error: ReactiveError) {
        self.signals.push(format!("error {error}"));
    }

    async fn on_complete(&mut self) {
        self.signals.push("complete".into());
    }
}

#[tokio::test]
async fn test_drive_delivers_values_then_complete() {
    // Arrange
    let mut recorder = Recorder::default();

    // Act
    let state = drive(
        &Flux::from_iterable(vec![1, 2]),
        &mut recorder,
        CancellationToken::new(),
    )
    .await;

    // Assert
    assert_eq!(state, SubscriptionState::Completed);
    assert_eq!(recorder.signals, vec!["subscribe", "next 1", "next 2", "complete"]);
}

#[tokio::test]
async fn test_drive_error_is_terminal() {
    // Arrange
    let mut recorder = Recorder::default();
    let flux = failing_after(vec![1], ReactiveError::source_failure("down"));

    // Act
    let state = drive(&flux, &mut recorder, CancellationToken::new()).await;

    // Assert
    assert_eq!(state, SubscriptionState::Errored);
    assert_eq!(
        recorder.signals,
        vec!["subscribe", "next 1", "error Source failure: down"]
    );
}

#[tokio::test]
async fn test_drive_mono() {
    // Arrange
    let mut recorder = Recorder::default();

    // Act
    let state = drive(&Mono::just(5), &mut recorder, CancellationToken::new()).await;

    // Assert
    assert_eq!(state, SubscriptionState::Completed);
    assert_eq!(recorder.signals, vec!["subscribe", "next 5", "complete"]);
}

#[tokio::test]
async fn test_drive_with_cancelled_token_never_subscribes() {
    // Arrange
    let mut recorder = Recorder::default();
    let token = CancellationToken::new();
    token.cancel();

    // Act
    let state = drive(&Flux::just(1), &mut recorder, token).await;

    // Assert
    assert_eq!(state, SubscriptionState::Cancelled);
    assert!(recorder.signals.is_empty());
}

#[test]
fn test_terminal_states() {
    assert!(!SubscriptionState::Created.is_terminal());
    assert!(!SubscriptionState::Running.is_terminal());
    assert!(SubscriptionState::Completed.is_terminal());
    assert!(SubscriptionState::Errored.is_terminal());
    assert!(SubscriptionState::Cancelled.is_terminal());
}
