// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the reflux reactive streaming library.
//!
//! This crate is designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! ## `StepVerifier<T>`
//!
//! Subscribes once and checks the sequence of signals step by step:
//!
//! ```rust
//! use reflux_stream::Mono;
//! use reflux_test_utils::StepVerifier;
//!
//! # async fn example() {
//! StepVerifier::create(&Mono::just(3).map(|n| n * 2))
//!     .expect_next(6)
//!     .verify_complete()
//!     .await;
//! # }
//! ```
//!
//! ## Failing sources
//!
//! [`failing_after`] emits some values and then an error, on every
//! subscription; pair it with [`InvocationCounter`] and `Flux::defer` to
//! observe re-subscriptions:
//!
//! ```rust
//! use reflux_core::ReactiveError;
//! use reflux_stream::Flux;
//! use reflux_test_utils::{failing_after, InvocationCounter, StepVerifier};
//!
//! # async fn example() {
//! let counter = InvocationCounter::new();
//! let calls = counter.clone();
//! let flaky = Flux::defer(move || {
//!     calls.increment();
//!     failing_after(vec![1], ReactiveError::source_failure("down"))
//! });
//!
//! StepVerifier::create(&flaky.retry(2))
//!     .expect_next_values([1, 1, 1])
//!     .verify_error()
//!     .await;
//! assert_eq!(counter.count(), 3);
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `step_verifier` - `StepVerifier<T>`
//! - `error_injection` - `ErrorInjectingStream` and `failing_after`
//! - `invocation_counter` - `InvocationCounter`
//! - `helpers` - Timing assertions over raw signal streams

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod invocation_counter;
pub mod step_verifier;

pub use error_injection::{failing_after, ErrorInjectingStream};
pub use helpers::{assert_completes_within, assert_silent_for};
pub use invocation_counter::InvocationCounter;
pub use step_verifier::StepVerifier;
