// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::mono::Mono;
use futures::future::try_join;
use reflux_core::ReactiveError;
use std::sync::Arc;

impl<T: Send + 'static> Mono<T> {
    /// Combines this value with the value of `other`.
    ///
    /// Both sides are subscribed concurrently. The combined value is produced
    /// once both have a value. The first error fails the result and drops the
    /// other side; if either side completes empty, so does the result.
    pub fn zip_with<U, R, F>(&self, other: &Mono<U>, combiner: F) -> Mono<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let combiner = Arc::new(combiner);
        Mono::from_future(move || {
            let both = try_join(left.outcome(), right.outcome());
            let combiner = Arc::clone(&combiner);
            async move {
                let combined = match both.await? {
                    (Some(left), Some(right)) => Some(combiner(left, right)),
                    _ => None,
                };
                Ok::<_, ReactiveError>(combined)
            }
        })
    }

    /// Pairs this value with the value of `other`.
    pub fn zip<U>(&self, other: &Mono<U>) -> Mono<(T, U)>
    where
        U: Send + 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }
}
