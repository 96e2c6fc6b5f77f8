// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error translation.
//!
//! `on_error_map` rewrites the terminal error and nothing else: values and
//! completion pass through unchanged.
//!
//! ```
//! use reflux_stream::Flux;
//! use reflux_core::ReactiveError;
//!
//! let movies: Flux<u32> = Flux::error(ReactiveError::source_failure("catalog offline"))
//!     .on_error_map(|error| ReactiveError::wrapped("movie lookup failed", error));
//! # let _ = movies;
//! ```

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::StreamExt;
use reflux_core::ReactiveError;
use std::sync::Arc;

impl<T: Send + 'static> Flux<T> {
    /// Replaces the terminal error with `mapper(error)`.
    pub fn on_error_map<F>(&self, mapper: F) -> Flux<T>
    where
        F: Fn(ReactiveError) -> ReactiveError + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let mapper = Arc::new(mapper);
        Flux::from_stream_fn(move || {
            let mapper = Arc::clone(&mapper);
            upstream
                .signals()
                .map(move |item| item.map_err(|error| mapper(error)))
        })
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Replaces the error with `mapper(error)`.
    pub fn on_error_map<F>(&self, mapper: F) -> Mono<T>
    where
        F: Fn(ReactiveError) -> ReactiveError + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let mapper = Arc::new(mapper);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let mapper = Arc::clone(&mapper);
            async move { outcome.await.map_err(|error| mapper(error)) }
        })
    }
}
