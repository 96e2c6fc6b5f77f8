// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded re-subscription on error.
//!
//! `retry(n)` subscribes to the upstream again, from its source, each time it
//! fails, up to `n` extra times. Side effects in the upstream run again on
//! every attempt. Values emitted by a failed attempt have already been
//! delivered and are not withdrawn. Only the last attempt's error reaches the
//! subscriber.

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::StreamExt;
use reflux_core::StreamItem;

impl<T: Send + 'static> Flux<T> {
    /// Re-subscribes to the upstream up to `max_retries` times after an error.
    ///
    /// A permanently failing upstream is subscribed `max_retries + 1` times.
    pub fn retry(&self, max_retries: usize) -> Flux<T> {
        let upstream = self.clone();
        Flux::from_stream_fn(move || {
            let upstream = upstream.clone();
            async_stream::stream! {
                let mut attempt = 0;
                loop {
                    let mut signals = upstream.signals();
                    let mut failure = None;
                    while let Some(item) = signals.next().await {
                        match item {
                            StreamItem::Error(error) => {
                                failure = Some(error);
                                break;
                            }
                            value => yield value,
                        }
                    }

                    match failure {
                        Some(error) if attempt < max_retries => {
                            attempt += 1;
                            warn!("retry {}/{} after error: {}", attempt, max_retries, error);
                        }
                        Some(error) => {
                            yield StreamItem::Error(error);
                            break;
                        }
                        None => break,
                    }
                }
            }
        })
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Re-subscribes to the upstream up to `max_retries` times after an error.
    pub fn retry(&self, max_retries: usize) -> Mono<T> {
        let upstream = self.clone();
        Mono::from_future(move || {
            let upstream = upstream.clone();
            async move {
                let mut attempt = 0;
                loop {
                    match upstream.outcome().await {
                        Err(error) if attempt < max_retries => {
                            attempt += 1;
                            warn!("retry {}/{} after error: {}", attempt, max_retries, error);
                        }
                        outcome => return outcome,
                    }
                }
            }
        })
    }
}
