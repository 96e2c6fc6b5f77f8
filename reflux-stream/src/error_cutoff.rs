// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use pin_project::pin_project;
use reflux_core::StreamItem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Ends a signal stream right after its first error.
///
/// The inner stream is dropped as soon as the error is seen, which tears
/// down any inner subscriptions it still holds.
#[pin_project]
pub(crate) struct ErrorCutoff<S> {
    #[pin]
    inner: Option<S>,
}

impl<S> ErrorCutoff<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<S, T> Stream for ErrorCutoff<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(inner) = this.inner.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match inner.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Error(error))) => {
                this.inner.set(None);
                Poll::Ready(Some(StreamItem::Error(error)))
            }
            Poll::Ready(None) => {
                this.inner.set(None);
                Poll::Ready(None)
            }
            other => other,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => (0, inner.size_hint().1),
            None => (0, Some(0)),
        }
    }
}
