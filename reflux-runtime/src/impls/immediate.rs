// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use futures::future::{ready, Ready};
use std::time::{Duration, Instant};

/// Timer whose sleeps complete on first poll.
///
/// Removes wall-clock waits from pipelines that use `delay_elements`; every
/// element still goes through one extra poll, but no time passes.
#[derive(Clone, Debug, Default)]
pub struct ImmediateTimer;

impl Timer for ImmediateTimer {
    type Sleep = Ready<()>;

    type Instant = Instant;

    fn sleep_future(&self, _duration: Duration) -> Self::Sleep {
        ready(())
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}
