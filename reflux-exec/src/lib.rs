// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription and execution layer for reflux publishers.
//!
//! - [`Subscriber`] receives the signals of one subscription
//! - [`drive`] runs a subscription to completion on the current task
//! - [`SubscribeExt`] spawns subscriptions and returns a cancellable
//!   [`Subscription`] handle

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod drive;
pub mod state;
pub mod subscribe;
pub mod subscriber;

pub use drive::drive;
pub use state::SubscriptionState;
pub use subscribe::SubscribeExt;
#[cfg(feature = "runtime-tokio")]
pub use subscribe::Subscription;
pub use subscriber::{LambdaSubscriber, Subscriber};
