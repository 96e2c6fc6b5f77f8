// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise operators: `map`, `try_map`, `filter`, `take`.
//!
//! None of them reorder values. Errors from upstream pass through untouched;
//! a `try_map` function returning `Err` turns into the stream's error signal.

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::future::ready;
use futures::StreamExt;
use reflux_core::{ReactiveError, Result, StreamItem};
use std::sync::Arc;

impl<T: Send + 'static> Flux<T> {
    /// Applies `f` to every value, preserving order and count.
    pub fn map<U, F>(&self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            upstream.signals().map(move |item| item.map(|value| f(value)))
        })
    }

    /// Applies a fallible `f`; the first `Err` terminates the stream.
    pub fn try_map<U, F>(&self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Result<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            upstream
                .signals()
                .map(move |item| item.and_then(|value| f(value).into()))
        })
    }

    /// Keeps the values for which `predicate` holds.
    ///
    /// Filtering everything out is a normal, empty completion.
    pub fn filter<P>(&self, predicate: P) -> Flux<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Flux::from_stream_fn(move || {
            let predicate = Arc::clone(&predicate);
            upstream.signals().filter(move |item| {
                ready(match item {
                    StreamItem::Value(value) => predicate(value),
                    StreamItem::Error(_) => true,
                })
            })
        })
    }

    /// Completes after `count` values, releasing the upstream subscription.
    pub fn take(&self, count: usize) -> Flux<T> {
        let upstream = self.clone();
        Flux::from_stream_fn(move || upstream.signals().take(count))
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Transforms the value, if any.
    pub fn map<U, F>(&self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let f = Arc::clone(&f);
            async move { Ok::<_, ReactiveError>(outcome.await?.map(|value| f(value))) }
        })
    }

    /// Transforms the value with a fallible `f`; `Err` becomes the error signal.
    pub fn try_map<U, F>(&self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Result<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let f = Arc::clone(&f);
            async move { outcome.await?.map(|value| f(value)).transpose() }
        })
    }

    /// Completes empty when `predicate` rejects the value.
    pub fn filter<P>(&self, predicate: P) -> Mono<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let predicate = Arc::clone(&predicate);
            async move { Ok::<_, ReactiveError>(outcome.await?.filter(|value| predicate(value))) }
        })
    }
}
