// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multi-value stream descriptor.
//!
//! A [`Flux`] describes how to produce zero or more values followed by
//! completion or an error. Nothing runs until a subscriber asks for
//! [`signals`](crate::Publisher::signals); every such call replays the whole
//! pipeline from its source.
//!
//! ```
//! use reflux_stream::{Flux, Publisher};
//! use reflux_core::StreamItem;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let names = Flux::from_iterable(vec!["victor", "felipe", "joko", "peras"]);
//! let upper = names.map(|name| name.to_uppercase());
//!
//! // Applying an operator never changes the receiver
//! let original: Vec<_> = names.signals().filter_map(|i| async move { i.ok() }).collect().await;
//! assert_eq!(original, vec!["victor", "felipe", "joko", "peras"]);
//!
//! let transformed: Vec<_> = upper.signals().filter_map(|i| async move { i.ok() }).collect().await;
//! assert_eq!(transformed, vec!["VICTOR", "FELIPE", "JOKO", "PERAS"]);
//! # }
//! ```

use crate::error_cutoff::ErrorCutoff;
use crate::publisher::Publisher;
use futures::future::ready;
use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt};
use reflux_core::{ReactiveError, StreamItem};
use std::fmt;
use std::sync::Arc;

type SignalFactory<T> = dyn Fn() -> BoxStream<'static, StreamItem<T>> + Send + Sync;

/// Immutable, restartable description of a multi-value stream.
///
/// Cloning is cheap and shares the description; operators take `&self` and
/// return a new descriptor that holds a clone of its upstream.
pub struct Flux<T> {
    factory: Arc<SignalFactory<T>>,
}

impl<T> Clone for Flux<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Flux<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flux").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Builds a descriptor from a stream factory invoked once per subscription.
    ///
    /// Anything the factory yields after its first `Error` is discarded.
    pub fn from_stream_fn<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || ErrorCutoff::new(factory()).boxed()),
        }
    }

    /// Emits every item of `items` in order, then completes.
    pub fn from_iterable<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let items: Arc<[T]> = items.into_iter().collect();
        Self::from_stream_fn(move || {
            let items = Arc::clone(&items);
            stream::iter((0..items.len()).map(move |index| StreamItem::Value(items[index].clone())))
        })
    }

    /// Emits `value` once, then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_iterable([value])
    }

    /// Completes without emitting anything.
    pub fn empty() -> Self {
        Self::from_stream_fn(stream::empty)
    }

    /// Terminates every subscription with `error` and nothing else.
    pub fn error(error: ReactiveError) -> Self {
        Self::from_stream_fn(move || stream::once(ready(StreamItem::Error(error.clone()))))
    }

    /// Assembles the actual descriptor lazily, once per subscription.
    ///
    /// Side effects performed by `supplier` are repeated on every subscription
    /// (and therefore on every `retry` attempt).
    pub fn defer<F>(supplier: F) -> Self
    where
        F: Fn() -> Flux<T> + Send + Sync + 'static,
    {
        Self::from_stream_fn(move || supplier().signals())
    }

    /// Subscribes to each source in turn, starting the next one only after the
    /// previous completes. An error from any source ends the sequence.
    pub fn concat<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Flux<T>>,
    {
        let sources: Arc<[Flux<T>]> = sources.into_iter().collect();
        Self::from_stream_fn(move || {
            let sources = Arc::clone(&sources);
            stream::iter(0..sources.len())
                .map(move |index| sources[index].signals())
                .flatten()
        })
    }

    /// Appends `other` after this descriptor completes.
    pub fn concat_with(&self, other: &Flux<T>) -> Self {
        Self::concat([self.clone(), other.clone()])
    }

    /// Re-shapes this descriptor with a reusable pipeline.
    ///
    /// `pipeline` runs once, at assembly time; it receives a clone of `self`
    /// and returns the composed descriptor.
    pub fn transform<U, F>(&self, pipeline: F) -> Flux<U>
    where
        F: FnOnce(Flux<T>) -> Flux<U>,
    {
        pipeline(self.clone())
    }
}

impl<T: Send + 'static> Publisher<T> for Flux<T> {
    fn signals(&self) -> BoxStream<'static, StreamItem<T>> {
        (self.factory)()
    }
}
