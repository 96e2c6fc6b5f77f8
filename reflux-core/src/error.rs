// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for reflux reactive streams
//!
//! Every failure that travels through a stream's error channel is a
//! [`ReactiveError`]. The variants separate failures of the source itself,
//! failures raised inside a transformation, failures of a dependent
//! sub-stream, and errors that were rewritten by `on_error_map`.
//!
//! # Examples
//!
//! ```
//! use reflux_core::{ReactiveError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(ReactiveError::source_failure("catalog unavailable"))
//! }
//!
//! let err = load().unwrap_err();
//! let wrapped = ReactiveError::wrapped("movie aggregation failed", err);
//! assert!(wrapped.is_wrapped());
//! assert_eq!(wrapped.root_cause().to_string(), "Source failure: catalog unavailable");
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all reflux operations.
///
/// Cloning is cheap: nested errors are shared behind `Arc`, which lets an
/// error descriptor such as `Flux::error` replay the same failure on every
/// subscription.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReactiveError {
    /// The source failed while producing its initial sequence.
    #[error("Source failure: {context}")]
    SourceFailure {
        /// What the source was doing when it failed
        context: String,
    },

    /// A user supplied transformation rejected a value.
    #[error("Transform failure: {context}")]
    TransformFailure {
        /// Description of the rejected transformation
        context: String,
    },

    /// A dependent sub-stream failed, failing the aggregated element as a whole.
    #[error("Aggregation failure: {context}")]
    AggregationFailure {
        /// Which aggregate could not be assembled
        context: String,
        /// The sub-stream failure
        #[source]
        source: Arc<ReactiveError>,
    },

    /// An error rewritten by an error mapper.
    #[error("{context}")]
    WrappedFailure {
        /// Description attached by the mapper
        context: String,
        /// The original error
        #[source]
        source: Arc<ReactiveError>,
    },

    /// Custom error from user code.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn Error + Send + Sync>),

    /// Several independent failures, e.g. from subscriber callbacks.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<ReactiveError>,
    },
}

impl ReactiveError {
    /// Create a source failure with the given context
    pub fn source_failure(context: impl Into<String>) -> Self {
        Self::SourceFailure {
            context: context.into(),
        }
    }

    /// Create a transform failure with the given context
    pub fn transform_failure(context: impl Into<String>) -> Self {
        Self::TransformFailure {
            context: context.into(),
        }
    }

    /// Fail an aggregate because one of its parts failed
    pub fn aggregation_failure(context: impl Into<String>, source: ReactiveError) -> Self {
        Self::AggregationFailure {
            context: context.into(),
            source: Arc::new(source),
        }
    }

    /// Wrap an error with additional context, keeping the original as `source`
    pub fn wrapped(context: impl Into<String>, source: ReactiveError) -> Self {
        Self::WrappedFailure {
            context: context.into(),
            source: Arc::new(source),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Aggregate multiple user errors into a `MultipleErrors` variant
    ///
    /// # Examples
    ///
    /// ```
    /// use reflux_core::ReactiveError;
    ///
    /// let errors = vec![
    ///     std::io::Error::other("first"),
    ///     std::io::Error::other("second"),
    /// ];
    ///
    /// let result = ReactiveError::from_user_errors(errors);
    /// assert!(matches!(result, ReactiveError::MultipleErrors { count: 2, .. }));
    /// ```
    pub fn from_user_errors<E>(errors: Vec<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors.into_iter().map(Self::user_error).collect();
        Self::MultipleErrors { count, errors }
    }

    /// Returns `true` if this error was produced by an error mapper.
    #[must_use]
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::WrappedFailure { .. })
    }

    /// Walks `WrappedFailure` and `AggregationFailure` chains down to the
    /// error that started them.
    #[must_use]
    pub fn root_cause(&self) -> &ReactiveError {
        let mut current = self;
        while let Self::WrappedFailure { source, .. } | Self::AggregationFailure { source, .. } =
            current
        {
            current = source.as_ref();
        }
        current
    }
}

/// Specialized Result type for reflux operations
pub type Result<T> = std::result::Result<T, ReactiveError>;

/// Helper trait for attaching context to foreign errors.
pub trait ResultExt<T> {
    /// Convert the error into a `TransformFailure` carrying `context`.
    ///
    /// # Errors
    /// Returns `Err(ReactiveError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](ResultExt::context), building the message lazily.
    ///
    /// # Errors
    /// Returns `Err(ReactiveError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReactiveError::transform_failure(format!("{}: {e}", context.into())))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReactiveError::transform_failure(format!("{}: {e}", f())))
    }
}
