// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer capability injected into time-based operators such as
//! `Flux::delay_elements`.
//!
//! Production code uses [`TokioTimer`]; tests that only care about ordering
//! can use [`ImmediateTimer`] or a paused tokio clock.

pub mod impls;
pub mod timer;

pub use impls::immediate::ImmediateTimer;
#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use timer::Timer;
