// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Restartable reactive stream descriptors.
//!
//! This crate provides two lazy, immutable descriptors:
//!
//! - **[`Flux<T>`]**: zero or more values, then completion or an error
//! - **[`Mono<T>`]**: zero or one value, then completion or an error
//!
//! Building a pipeline does no work. Each subscription, i.e. each call to
//! [`Publisher::signals`] or [`Mono::outcome`], replays the pipeline from its
//! source, so a descriptor can be subscribed any number of times and every
//! subscription sees the same sequence (given deterministic sources).
//!
//! # Signals
//!
//! A subscription observes values as [`StreamItem::Value`], at most one
//! terminal [`StreamItem::Error`], and then the end of the stream. An error
//! always terminates: nothing is emitted after it, and any inner
//! subscriptions still running are dropped.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](Flux::map)**, **[`try_map`](Flux::try_map)**: one output per value, order preserved
//! - **[`filter`](Flux::filter)**, **[`take`](Flux::take)**: subset of the values, order preserved
//! - **[`transform`](Flux::transform)**: apply a reusable pipeline
//!
//! ### Flattening
//!
//! - **[`flat_map`](Flux::flat_map)**: inner streams run concurrently and interleave
//! - **[`concat_map`](Flux::concat_map)**: inner streams run one after another
//! - **[`Mono::flat_map`]**, **[`Mono::flat_map_many`]**
//!
//! ### Combination and aggregation
//!
//! - **[`concat`](Flux::concat)**, **[`concat_with`](Flux::concat_with)**
//! - **[`Mono::zip_with`]**, **[`Mono::zip`]**
//! - **[`collect_list`](Flux::collect_list)**
//!
//! ### Errors
//!
//! - **[`on_error_map`](Flux::on_error_map)**: translate the terminal error
//! - **[`retry`](Flux::retry)**: re-subscribe a bounded number of times
//!
//! ### Time and side effects
//!
//! - **[`delay_elements`](Flux::delay_elements)**: per-value delay through an injected [`Timer`]
//! - **`do_on_*`** hooks and **[`log`](Flux::log)**
//!
//! # Example
//!
//! ```
//! use reflux_stream::Flux;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let letters = Flux::from_iterable(vec!["vi", "fe"])
//!     .map(|s| s.to_uppercase())
//!     .concat_map(|s| Flux::from_iterable(s.chars().map(String::from).collect::<Vec<_>>()))
//!     .collect_list();
//!
//! assert_eq!(
//!     letters.outcome().await.unwrap(),
//!     Some(vec!["V".to_string(), "I".into(), "F".into(), "E".into()])
//! );
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod collect_list;
pub mod delay_elements;
mod error_cutoff;
pub mod flat_map;
pub mod flux;
pub mod map;
pub mod mono;
pub mod on_error_map;
pub mod prelude;
pub mod publisher;
pub mod retry;
pub mod tap;
pub mod zip_with;

pub use flux::Flux;
pub use mono::Mono;
pub use publisher::Publisher;
pub use reflux_core::{ReactiveError, Result, StreamItem};
pub use reflux_runtime::Timer;
