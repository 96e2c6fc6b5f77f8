// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use reflux_core::ReactiveError;
use std::fmt;

/// Consumer of the signals of one subscription.
///
/// Callbacks are awaited one at a time, in signal order: `on_subscribe`
/// first, then any number of `on_next`, then at most one of `on_error` or
/// `on_complete`.
#[async_trait]
pub trait Subscriber<T: Send + 'static>: Send {
    /// The upstream has been subscribed; no value has been requested yet.
    async fn on_subscribe(&mut self) {}

    async fn on_next(&mut self, value: T);

    /// Terminal failure. The default implementation logs the error.
    async fn on_error(&mut self, error: ReactiveError) {
        error!("subscription failed: {}", error);
    }

    /// Successful termination.
    async fn on_complete(&mut self) {}
}

type OnNext<T> = Box<dyn FnMut(T) + Send>;
type OnError = Box<dyn FnMut(ReactiveError) + Send>;
type OnComplete = Box<dyn FnMut() + Send>;

/// [`Subscriber`] assembled from closures.
///
/// ```
/// use reflux_exec::{LambdaSubscriber, Subscriber};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut printer = LambdaSubscriber::from_fn(|name: String| println!("name: {name}"))
///     .with_error(|error| eprintln!("failed: {error}"))
///     .with_complete(|| println!("done"));
///
/// printer.on_next("victor".to_string()).await;
/// printer.on_complete().await;
/// # }
/// ```
pub struct LambdaSubscriber<T> {
    on_next: OnNext<T>,
    on_error: Option<OnError>,
    on_complete: Option<OnComplete>,
}

impl<T> LambdaSubscriber<T> {
    pub fn from_fn<F>(on_next: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        Self {
            on_next: Box::new(on_next),
            on_error: None,
            on_complete: None,
        }
    }

    /// Replaces the default error logging with `on_error`.
    #[must_use]
    pub fn with_error<F>(mut self, on_error: F) -> Self
    where
        F: FnMut(ReactiveError) + Send + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    #[must_use]
    pub fn with_complete<F>(mut self, on_complete: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

impl<T> fmt::Debug for LambdaSubscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaSubscriber")
            .field("on_error", &self.on_error.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Send + 'static> Subscriber<T> for LambdaSubscriber<T> {
    async fn on_next(&mut self, value: T) {
        (self.on_next)(value);
    }

    async fn on_error(&mut self, error: ReactiveError) {
        match self.on_error.as_mut() {
            Some(on_error) => on_error(error),
            None => error!("subscription failed: {}", error),
        }
    }

    async fn on_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }
}
