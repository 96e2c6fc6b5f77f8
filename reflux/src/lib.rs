// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Reflux
//!
//! Restartable single-value and multi-value reactive streams on top of the
//! Rust async ecosystem (tokio, futures).
//!
//! ## Overview
//!
//! - [`Flux<T>`]: zero or more values, then completion or an error
//! - [`Mono<T>`]: zero or one value, then completion or an error
//!
//! Both are immutable descriptors. Operators return new descriptors and
//! never change the receiver. Nothing runs until a subscription starts, and
//! every subscription replays the pipeline from its source.
//!
//! ## Quick Start
//!
//! ```rust
//! use reflux_rx::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let names = Flux::from_iterable(vec!["victor", "felipe", "joko", "peras"])
//!         .map(|name| name.to_uppercase())
//!         .filter(|name| name.len() > 4);
//!
//!     let (values, error) = names.collect_signals().await;
//!     assert_eq!(values, vec!["VICTOR", "FELIPE", "PERAS"]);
//!     assert!(error.is_none());
//! }
//! ```
//!
//! ## Crates
//!
//! - `reflux-core`: signals, errors and cancellation
//! - `reflux-runtime`: the `Timer` capability used by time-based operators
//! - `reflux-stream`: `Flux`, `Mono` and their operators
//! - `reflux-exec`: subscribers and spawned subscriptions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use reflux_core::{CancellationToken, ReactiveError, Result, ResultExt, StreamItem};
pub use reflux_runtime::{ImmediateTimer, Timer};
#[cfg(feature = "runtime-tokio")]
pub use reflux_runtime::TokioTimer;

// Re-export the descriptors
pub use reflux_stream::{Flux, Mono, Publisher};

// Re-export the execution layer
pub use reflux_exec::{drive, LambdaSubscriber, SubscribeExt, Subscriber, SubscriptionState};
#[cfg(feature = "runtime-tokio")]
pub use reflux_exec::Subscription;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Flux, Mono, Publisher, ReactiveError, StreamItem, SubscribeExt, Timer};
    #[cfg(feature = "runtime-tokio")]
    pub use crate::TokioTimer;
}
