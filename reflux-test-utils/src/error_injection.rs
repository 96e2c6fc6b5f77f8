// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in streams.
//!
//! [`ErrorInjectingStream`] wraps a plain value stream into signals and
//! injects a `StreamItem::Error` at a chosen position. [`failing_after`]
//! builds a restartable `Flux` on top of it.

use futures::{stream, Stream};
use reflux_core::{ReactiveError, StreamItem};
use reflux_stream::Flux;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a specified position.
///
/// # Examples
///
/// ```rust
/// use reflux_test_utils::ErrorInjectingStream;
/// use reflux_core::{ReactiveError, StreamItem};
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let base = stream::iter(vec![1, 2, 3]);
/// let mut signals = ErrorInjectingStream::new(base, 1, ReactiveError::source_failure("boom"));
///
/// assert!(matches!(signals.next().await, Some(StreamItem::Value(1))));
/// assert!(matches!(signals.next().await, Some(StreamItem::Error(_))));
/// assert!(matches!(signals.next().await, Some(StreamItem::Value(2))));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    error: ReactiveError,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a new error-injecting stream wrapper.
    ///
    /// # Arguments
    ///
    /// * `inner` - The base stream to wrap
    /// * `inject_error_at` - The position (0-indexed) at which to inject `error`
    /// * `error` - The error to inject
    pub fn new(inner: S, inject_error_at: usize, error: ReactiveError) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            error,
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.inject_error_at == Some(self.count) {
            self.inject_error_at = None; // Only inject once
            self.count += 1;
            return Poll::Ready(Some(StreamItem::Error(self.error.clone())));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            // A position past the end still gets its error
            Poll::Ready(None) if self.inject_error_at.is_some() => {
                self.inject_error_at = None;
                Poll::Ready(Some(StreamItem::Error(self.error.clone())))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// A `Flux` that emits `values` in order, then fails with `error`.
///
/// Every subscription replays the values and fails again.
pub fn failing_after<T>(values: Vec<T>, error: ReactiveError) -> Flux<T>
where
    T: Clone + Send + Sync + 'static,
{
    Flux::from_stream_fn(move || {
        ErrorInjectingStream::new(stream::iter(values.clone()), values.len(), error.clone())
    })
}
