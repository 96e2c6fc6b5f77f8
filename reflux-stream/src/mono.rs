// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-value stream descriptor.
//!
//! A [`Mono`] resolves to at most one value, or fails. Each subscription is a
//! call to [`outcome`](Mono::outcome), which builds a fresh future:
//!
//! - `Ok(Some(value))`: one `onNext`, then `onComplete`
//! - `Ok(None)`: `onComplete` without a value
//! - `Err(error)`: `onError`
//!
//! ```
//! use reflux_stream::Mono;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let name = Mono::just("victor")
//!     .map(|s| s.to_uppercase())
//!     .filter(|s| s.len() > 3);
//!
//! assert_eq!(name.outcome().await.unwrap(), Some("VICTOR".to_string()));
//! // Subscribing again replays the whole chain
//! assert_eq!(name.outcome().await.unwrap(), Some("VICTOR".to_string()));
//! # }
//! ```

use crate::flux::Flux;
use crate::publisher::Publisher;
use futures::future::{ready, BoxFuture};
use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt};
use reflux_core::{ReactiveError, Result, StreamItem};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type OutcomeFactory<T> = dyn Fn() -> BoxFuture<'static, Result<Option<T>>> + Send + Sync;

/// Immutable, restartable description of a zero-or-one value computation.
pub struct Mono<T> {
    factory: Arc<OutcomeFactory<T>>,
}

impl<T> Clone for Mono<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Mono<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mono").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Builds a descriptor from a future factory invoked once per subscription.
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed()),
        }
    }

    /// Emits `value`, then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_future(move || ready(Ok(Some(value.clone()))))
    }

    /// Completes without a value.
    pub fn empty() -> Self {
        Self::from_future(|| ready(Ok(None)))
    }

    /// Fails every subscription with `error`.
    pub fn error(error: ReactiveError) -> Self {
        Self::from_future(move || ready(Err(error.clone())))
    }

    /// Assembles the actual descriptor lazily, once per subscription.
    pub fn defer<F>(supplier: F) -> Self
    where
        F: Fn() -> Mono<T> + Send + Sync + 'static,
    {
        Self::from_future(move || supplier().outcome())
    }

    /// Runs one subscription and resolves to its outcome.
    pub fn outcome(&self) -> BoxFuture<'static, Result<Option<T>>> {
        (self.factory)()
    }

    /// Views this descriptor as a `Flux` of zero or one element.
    pub fn flux(&self) -> Flux<T> {
        let upstream = self.clone();
        Flux::from_stream_fn(move || upstream.signals())
    }
}

impl<T: Send + 'static> Publisher<T> for Mono<T> {
    fn signals(&self) -> BoxStream<'static, StreamItem<T>> {
        stream::once(self.outcome())
            .filter_map(|outcome| {
                ready(match outcome {
                    Ok(Some(value)) => Some(StreamItem::Value(value)),
                    Ok(None) => None,
                    Err(error) => Some(StreamItem::Error(error)),
                })
            })
            .boxed()
    }
}
