// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening operators.
//!
//! | Operator | Inner subscriptions | Output order |
//! |----------|---------------------|--------------|
//! | [`Flux::flat_map`] | all at once | interleaved as inner values arrive; each inner keeps its own order |
//! | [`Flux::concat_map`] | one at a time | upstream order, then each inner's order |
//! | [`Mono::flat_map`] | one | the inner outcome |
//! | [`Mono::flat_map_many`] | one | the inner `Flux` |
//!
//! An error from the upstream or from any inner stream ends the output and
//! drops every inner subscription still running.

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::future::ready;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use reflux_core::StreamItem;
use std::sync::Arc;

fn inner_signals<T, U, F>(item: StreamItem<T>, f: &F) -> BoxStream<'static, StreamItem<U>>
where
    U: Send + 'static,
    F: Fn(T) -> Flux<U>,
{
    match item {
        StreamItem::Value(value) => f(value).signals(),
        StreamItem::Error(error) => stream::once(ready(StreamItem::Error(error))).boxed(),
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Maps every value to an inner `Flux` and merges all of them concurrently.
    ///
    /// Values of one inner stream keep their relative order; values of
    /// different inner streams may interleave in any order.
    pub fn flat_map<U, F>(&self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Flux<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            upstream
                .signals()
                .map(move |item| inner_signals(item, f.as_ref()))
                .flatten_unordered(None)
        })
    }

    /// Maps every value to an inner `Flux` and drains them one after another.
    ///
    /// The next inner stream is subscribed only once the previous one has
    /// completed, so the output order does not depend on inner latency.
    pub fn concat_map<U, F>(&self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Flux<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            upstream
                .signals()
                .map(move |item| inner_signals(item, f.as_ref()))
                .flatten()
        })
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Continues with the `Mono` returned by `f`; its outcome becomes ours.
    pub fn flat_map<U, F>(&self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Mono<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let f = Arc::clone(&f);
            async move {
                match outcome.await? {
                    Some(value) => f(value).outcome().await,
                    None => Ok(None),
                }
            }
        })
    }

    /// Continues with the `Flux` returned by `f`, turning this single value
    /// into many.
    pub fn flat_map_many<U, F>(&self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Flux<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            upstream
                .signals()
                .map(move |item| inner_signals(item, f.as_ref()))
                .flatten()
        })
    }
}
