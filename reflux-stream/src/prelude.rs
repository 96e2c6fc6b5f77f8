// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the descriptors and the types they speak.
//!
//! ```
//! use reflux_stream::prelude::*;
//!
//! let names: Flux<&str> = Flux::from_iterable(vec!["victor", "joko"]);
//! let first: Mono<Vec<&str>> = names.take(1).collect_list();
//! # let _ = first;
//! ```

pub use crate::flux::Flux;
pub use crate::mono::Mono;
pub use crate::publisher::Publisher;
pub use reflux_core::{ReactiveError, StreamItem};
pub use reflux_runtime::Timer;
