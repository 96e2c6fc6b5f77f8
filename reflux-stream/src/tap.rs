// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect hooks for observing signals.
//!
//! Hooks never alter, drop or reorder signals. They run at fixed points of a
//! subscription:
//!
//! - `do_on_subscribe`: when a subscription starts, after the upstream has
//!   been subscribed and before the first value is requested
//! - `do_on_next`: for every value, before it is handed downstream
//! - `do_on_error`: for the terminal error
//! - `do_on_complete`: on successful completion only
//!
//! `log(category)` attaches all four and reports them through the logging
//! facade.
//!
//! ```
//! use reflux_stream::Flux;
//!
//! let names = Flux::from_iterable(vec!["victor", "felipe"])
//!     .do_on_subscribe(|| println!("subscribed"))
//!     .do_on_next(|name| println!("next: {name}"))
//!     .log("names");
//! # let _ = names;
//! ```

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::Stream;
use pin_project::pin_project;
use reflux_core::{ReactiveError, StreamItem};
use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

type NextHook<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorHook = Arc<dyn Fn(&ReactiveError) + Send + Sync>;
type CompleteHook = Arc<dyn Fn() + Send + Sync>;

/// Callbacks invoked by [`SignalTap`].
pub(crate) struct Hooks<T> {
    on_next: Option<NextHook<T>>,
    on_error: Option<ErrorHook>,
    on_complete: Option<CompleteHook>,
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            on_next: self.on_next.clone(),
            on_error: self.on_error.clone(),
            on_complete: self.on_complete.clone(),
        }
    }
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_complete: None,
        }
    }
}

/// Invokes [`Hooks`] as signals pass through.
#[pin_project]
pub(crate) struct SignalTap<S, T> {
    #[pin]
    inner: S,
    hooks: Hooks<T>,
    terminated: bool,
}

impl<S, T> SignalTap<S, T> {
    pub(crate) fn new(inner: S, hooks: Hooks<T>) -> Self {
        Self {
            inner,
            hooks,
            terminated: false,
        }
    }
}

impl<S, T> Stream for SignalTap<S, T>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        let polled = this.inner.poll_next(cx);
        match &polled {
            Poll::Ready(Some(StreamItem::Value(value))) => {
                if let Some(on_next) = &this.hooks.on_next {
                    on_next(value);
                }
            }
            Poll::Ready(Some(StreamItem::Error(error))) => {
                *this.terminated = true;
                if let Some(on_error) = &this.hooks.on_error {
                    on_error(error);
                }
            }
            Poll::Ready(None) => {
                *this.terminated = true;
                if let Some(on_complete) = &this.hooks.on_complete {
                    on_complete();
                }
            }
            Poll::Pending => {}
        }
        polled
    }
}

impl<T: Send + 'static> Flux<T> {
    fn with_hooks(&self, hooks: Hooks<T>) -> Flux<T> {
        let upstream = self.clone();
        Flux::from_stream_fn(move || SignalTap::new(upstream.signals(), hooks.clone()))
    }

    /// Runs `hook` each time a subscription to this descriptor starts.
    pub fn do_on_subscribe<F>(&self, hook: F) -> Flux<T>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Flux::from_stream_fn(move || {
            let signals = upstream.signals();
            hook();
            signals
        })
    }

    /// Runs `hook` for every value.
    pub fn do_on_next<F>(&self, hook: F) -> Flux<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.with_hooks(Hooks {
            on_next: Some(Arc::new(hook)),
            ..Hooks::default()
        })
    }

    /// Runs `hook` for the terminal error.
    pub fn do_on_error<F>(&self, hook: F) -> Flux<T>
    where
        F: Fn(&ReactiveError) + Send + Sync + 'static,
    {
        self.with_hooks(Hooks {
            on_error: Some(Arc::new(hook)),
            ..Hooks::default()
        })
    }

    /// Runs `hook` on successful completion.
    pub fn do_on_complete<F>(&self, hook: F) -> Flux<T>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.with_hooks(Hooks {
            on_complete: Some(Arc::new(hook)),
            ..Hooks::default()
        })
    }

    /// Logs every signal under `category`.
    pub fn log(&self, category: &'static str) -> Flux<T>
    where
        T: Debug,
    {
        self.with_hooks(logging_hooks(category))
            .do_on_subscribe(move || info!("[{}] onSubscribe", category))
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Runs `hook` each time a subscription to this descriptor starts.
    pub fn do_on_subscribe<F>(&self, hook: F) -> Mono<T>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            hook();
            outcome
        })
    }

    /// Runs `hook` with the value, if one is produced.
    pub fn do_on_next<F>(&self, hook: F) -> Mono<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let hook = Arc::new(hook);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let hook = Arc::clone(&hook);
            async move {
                let outcome = outcome.await;
                if let Ok(Some(value)) = &outcome {
                    hook(value);
                }
                outcome
            }
        })
    }

    /// Runs `hook` with the error, if the subscription fails.
    pub fn do_on_error<F>(&self, hook: F) -> Mono<T>
    where
        F: Fn(&ReactiveError) + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let hook = Arc::new(hook);
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            let hook = Arc::clone(&hook);
            async move {
                let outcome = outcome.await;
                if let Err(error) = &outcome {
                    hook(error);
                }
                outcome
            }
        })
    }

    /// Logs every signal under `category`.
    pub fn log(&self, category: &'static str) -> Mono<T>
    where
        T: Debug,
    {
        let upstream = self.clone();
        Mono::from_future(move || {
            let outcome = upstream.outcome();
            info!("[{}] onSubscribe", category);
            async move {
                let outcome = outcome.await;
                match &outcome {
                    Ok(Some(value)) => {
                        info!("[{}] onNext({:?})", category, value);
                        info!("[{}] onComplete()", category);
                    }
                    Ok(None) => info!("[{}] onComplete()", category),
                    Err(error) => info!("[{}] onError({})", category, error),
                }
                outcome
            }
        })
    }
}

fn logging_hooks<T: Debug + 'static>(category: &'static str) -> Hooks<T> {
    Hooks {
        on_next: Some(Arc::new(move |value: &T| {
            info!("[{}] onNext({:?})", category, value)
        })),
        on_error: Some(Arc::new(move |error: &ReactiveError| {
            info!("[{}] onError({})", category, error)
        })),
        on_complete: Some(Arc::new(move || info!("[{}] onComplete()", category))),
    }
}
