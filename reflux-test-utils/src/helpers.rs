// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing assertions over a raw subscription, for tests that step through
//! [`Publisher::signals`](reflux_stream::Publisher::signals) by hand.
//!
//! Both helpers are built on `tokio::time::timeout`, so under a paused clock
//! they advance virtual time instead of waiting.

use futures::{Stream, StreamExt};
use reflux_core::StreamItem;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::timeout;

/// Panics if `signals` yields a value or an error within `window`.
pub async fn assert_silent_for<S, T>(signals: &mut S, window: Duration)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Debug,
{
    if let Ok(signal) = timeout(window, signals.next()).await {
        panic!("expected no signal for {window:?}, got {signal:?}");
    }
}

/// Panics unless `signals` completes, with nothing else emitted, within
/// `window`.
pub async fn assert_completes_within<S, T>(signals: &mut S, window: Duration)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Debug,
{
    match timeout(window, signals.next()).await {
        Ok(None) => {}
        Ok(Some(signal)) => panic!("expected completion, got {signal:?}"),
        Err(_) => panic!("no completion within {window:?}"),
    }
}
