// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use crate::mono::Mono;
use crate::publisher::Publisher;
use futures::StreamExt;
use reflux_core::{ReactiveError, StreamItem};

impl<T: Send + 'static> Flux<T> {
    /// Buffers the whole sequence into one `Vec`, in emission order.
    ///
    /// An empty upstream yields `Some(vec![])`; an upstream error discards the
    /// values buffered so far and fails the `Mono`.
    pub fn collect_list(&self) -> Mono<Vec<T>> {
        let upstream = self.clone();
        Mono::from_future(move || {
            let mut signals = upstream.signals();
            async move {
                let mut values = Vec::new();
                while let Some(item) = signals.next().await {
                    match item {
                        StreamItem::Value(value) => values.push(value),
                        StreamItem::Error(error) => return Err(error),
                    }
                }
                Ok::<_, ReactiveError>(Some(values))
            }
        })
    }
}
