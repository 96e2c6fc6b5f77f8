// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::drive::drive;
use crate::subscriber::Subscriber;
use async_trait::async_trait;
use reflux_core::{CancellationToken, ReactiveError};
use reflux_stream::Publisher;

#[cfg(feature = "runtime-tokio")]
use crate::drive::drive_signals;
#[cfg(feature = "runtime-tokio")]
use crate::state::SubscriptionState;
#[cfg(feature = "runtime-tokio")]
use crate::subscriber::LambdaSubscriber;

/// Handle to a subscription running on its own task.
///
/// Dropping the handle does not cancel the subscription; call
/// [`cancel`](Subscription::cancel) for that.
#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    handle: tokio::task::JoinHandle<SubscriptionState>,
}

#[cfg(feature = "runtime-tokio")]
impl Subscription {
    /// Stops the subscription and tears down its upstream. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits for the subscription to reach a terminal state.
    ///
    /// # Errors
    /// Returns `Err(ReactiveError::UserError)` if a subscriber callback
    /// panicked.
    pub async fn join(self) -> Result<SubscriptionState, ReactiveError> {
        self.handle.await.map_err(ReactiveError::user_error)
    }
}

/// Extension trait for consuming any [`Publisher`].
///
/// ```
/// use reflux_exec::SubscribeExt;
/// use reflux_stream::Flux;
///
/// # #[tokio::main]
/// # async fn main() {
/// let names = Flux::from_iterable(vec!["victor", "felipe"]).map(|s| s.to_uppercase());
///
/// let (values, error) = names.collect_signals().await;
/// assert_eq!(values, vec!["VICTOR", "FELIPE"]);
/// assert!(error.is_none());
/// # }
/// ```
#[async_trait]
pub trait SubscribeExt<T: Send + 'static>: Publisher<T> {
    /// Spawns a subscription on the tokio runtime, feeding `subscriber`.
    #[cfg(feature = "runtime-tokio")]
    fn subscribe_with<S>(&self, subscriber: S) -> Subscription
    where
        S: Subscriber<T> + 'static;

    /// Spawns a subscription that hands every value to `on_next`.
    ///
    /// Errors are logged.
    #[cfg(feature = "runtime-tokio")]
    fn subscribe_fn<F>(&self, on_next: F) -> Subscription
    where
        F: FnMut(T) + Send + 'static;

    /// Runs one subscription to its end on the current task.
    ///
    /// Returns the values received and the terminal error, if any.
    async fn collect_signals(&self) -> (Vec<T>, Option<ReactiveError>);
}

#[async_trait]
impl<T, P> SubscribeExt<T> for P
where
    T: Send + 'static,
    P: Publisher<T> + ?Sized,
{
    #[cfg(feature = "runtime-tokio")]
    fn subscribe_with<S>(&self, mut subscriber: S) -> Subscription
    where
        S: Subscriber<T> + 'static,
    {
        let token = CancellationToken::new();
        let signals = self.signals();
        let handle = tokio::spawn({
            let token = token.clone();
            async move { drive_signals(signals, &mut subscriber, token).await }
        });
        Subscription { token, handle }
    }

    #[cfg(feature = "runtime-tokio")]
    fn subscribe_fn<F>(&self, on_next: F) -> Subscription
    where
        F: FnMut(T) + Send + 'static,
    {
        self.subscribe_with(LambdaSubscriber::from_fn(on_next))
    }

    async fn collect_signals(&self) -> (Vec<T>, Option<ReactiveError>) {
        let mut collector = Collector {
            values: Vec::new(),
            error: None,
        };
        drive(self, &mut collector, CancellationToken::new()).await;
        (collector.values, collector.error)
    }
}

struct Collector<T> {
    values: Vec<T>,
    error: Option<ReactiveError>,
}

#[async_trait]
impl<T: Send + 'static> Subscriber<T> for Collector<T> {
    async fn on_next(&mut self, value: T) {
        self.values.push(value);
    }

    async fn on_error(&mut self, error: ReactiveError) {
        self.error = Some(error);
    }
}
