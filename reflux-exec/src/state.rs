// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Lifecycle of one subscription.
///
/// `Created → Running → {Completed | Errored | Cancelled}`. A terminal state
/// is final: no signal reaches the subscriber once it is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubscriptionState {
    /// Assembled, upstream not yet subscribed.
    Created,
    /// Upstream subscribed, signals flowing.
    Running,
    /// `on_complete` delivered.
    Completed,
    /// `on_error` delivered.
    Errored,
    /// Stopped by its cancellation token; no terminal signal delivered.
    Cancelled,
}

impl SubscriptionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Errored | Self::Cancelled)
    }
}
