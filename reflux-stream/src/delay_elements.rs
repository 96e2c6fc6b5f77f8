// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use crate::publisher::Publisher;
use futures::future::Either;
use futures::{FutureExt, StreamExt};
use reflux_core::StreamItem;
use reflux_runtime::Timer;
use std::sync::Arc;
use std::time::Duration;

impl<T: Send + 'static> Flux<T> {
    /// Holds every value back for `duration` before emitting it.
    ///
    /// Values are delayed one at a time, so relative order is preserved and
    /// the total delay grows with the number of values. Errors are forwarded
    /// without delay.
    pub fn delay_elements<Tm: Timer>(&self, duration: Duration, timer: Tm) -> Flux<T> {
        self.delay_elements_by(timer, move |_| duration)
    }

    /// Holds every value back for the duration computed by `delay`.
    ///
    /// `delay` runs once per value, per subscription, so it may return a
    /// different duration each time.
    pub fn delay_elements_by<Tm, D>(&self, timer: Tm, delay: D) -> Flux<T>
    where
        Tm: Timer,
        D: Fn(&T) -> Duration + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let delay = Arc::new(delay);
        Flux::from_stream_fn(move || {
            let timer = timer.clone();
            let delay = Arc::clone(&delay);
            upstream.signals().then(move |item| match item {
                StreamItem::Value(value) => {
                    let pause = delay(&value);
                    Either::Left(timer.sleep_future(pause).map(move |()| StreamItem::Value(value)))
                }
                error => Either::Right(futures::future::ready(error)),
            })
        })
    }
}
