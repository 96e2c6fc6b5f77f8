// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::BoxStream;
use reflux_core::StreamItem;

/// A restartable source of signals.
///
/// Each call to [`signals`](Publisher::signals) is one subscription: it runs
/// the whole pipeline from its source, independently of every other call.
/// The returned stream yields `Value`s, at most one trailing `Error`, and ends
/// on completion.
pub trait Publisher<T>: Send + Sync {
    /// Starts a new, independent run of this descriptor.
    fn signals(&self) -> BoxStream<'static, StreamItem<T>>;
}
