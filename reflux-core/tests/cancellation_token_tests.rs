// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use reflux_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
}

#[test]
fn test_cancelled_ready_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();
    assert!(token.cancelled().now_or_never().is_some());
}

#[test]
fn test_cancelled_pending_until_cancel() {
    let token = CancellationToken::new();
    assert!(token.cancelled().now_or_never().is_none());
}

#[tokio::test]
async fn test_cancel_wakes_waiter_on_other_task() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let waiter_token = token.clone();
    let waiter = tokio::spawn(async move {
        waiter_token.cancelled().await;
    });

    // Act
    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    // Assert
    tokio::time::timeout(Duration::from_secs(1), waiter).await??;
    Ok(())
}
