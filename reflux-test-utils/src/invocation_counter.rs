// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter for asserting how many times a source was subscribed.
///
/// Clones share the same count, so a clone can be moved into a `defer`
/// closure while the test keeps the original.
///
/// ```rust
/// use reflux_test_utils::InvocationCounter;
///
/// let counter = InvocationCounter::new();
/// let inside = counter.clone();
/// inside.increment();
/// inside.increment();
/// assert_eq!(counter.count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InvocationCounter {
    count: Arc<AtomicUsize>,
}

impl InvocationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation and returns the new total.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
