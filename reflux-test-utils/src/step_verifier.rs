// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Declarative verification of a single subscription.
//!
//! A [`StepVerifier`] subscribes to a publisher, checks the expected values
//! one step at a time, then checks the terminal signal. Any mismatch panics
//! with a description of the step that failed and the signal actually seen.
//!
//! ```rust
//! use reflux_stream::Flux;
//! use reflux_test_utils::StepVerifier;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let names = Flux::from_iterable(vec!["victor", "felipe", "joko"]);
//!
//! StepVerifier::create(&names)
//!     .expect_next("victor")
//!     .expect_next_count(2)
//!     .verify_complete()
//!     .await;
//! # }
//! ```

use futures::stream::{BoxStream, Peekable};
use futures::StreamExt;
use reflux_core::{ReactiveError, StreamItem};
use reflux_stream::Publisher;
use std::fmt::Debug;
use std::pin::Pin;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

type ValueCheck<T> = Box<dyn Fn(&T) -> bool + Send>;

enum Step<T> {
    Next {
        description: String,
        check: ValueCheck<T>,
    },
    Count(usize),
    ConsumeWhile(ValueCheck<T>),
}

/// Builder of expectations against one subscription of a publisher.
pub struct StepVerifier<T> {
    signals: Peekable<BoxStream<'static, StreamItem<T>>>,
    steps: Vec<Step<T>>,
    timeout: Duration,
}

impl<T> StepVerifier<T>
where
    T: Debug + Send + 'static,
{
    /// Subscribes to `publisher`. The subscription only starts being polled
    /// when a `verify_*` method is awaited.
    pub fn create<P>(publisher: &P) -> Self
    where
        P: Publisher<T> + ?Sized,
    {
        Self {
            signals: publisher.signals().peekable(),
            steps: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Expects the next signal to be a value equal to `expected`.
    pub fn expect_next(mut self, expected: T) -> Self
    where
        T: PartialEq,
    {
        let description = format!("{expected:?}");
        self.steps.push(Step::Next {
            description,
            check: Box::new(move |value| value == &expected),
        });
        self
    }

    /// Expects the next values to equal `expected`, in order.
    pub fn expect_next_values<I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        expected
            .into_iter()
            .fold(self, |verifier, value| verifier.expect_next(value))
    }

    /// Expects the next signal to be a value satisfying `predicate`.
    pub fn expect_next_matches<P>(mut self, description: &str, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + 'static,
    {
        self.steps.push(Step::Next {
            description: description.to_string(),
            check: Box::new(predicate),
        });
        self
    }

    /// Expects exactly `count` more values, whatever they are.
    pub fn expect_next_count(mut self, count: usize) -> Self {
        self.steps.push(Step::Count(count));
        self
    }

    /// Consumes values for as long as `predicate` holds.
    pub fn then_consume_while<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + 'static,
    {
        self.steps.push(Step::ConsumeWhile(Box::new(predicate)));
        self
    }

    /// Bounds the whole verification; the default is five seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the steps, then expects the stream to complete.
    pub async fn verify_complete(self) {
        match self.run().await {
            None => {}
            Some(StreamItem::Value(value)) => {
                panic!("expected completion, got value {value:?}")
            }
            Some(StreamItem::Error(error)) => {
                panic!("expected completion, got error: {error}")
            }
        }
    }

    /// Runs the steps, then expects the stream to fail. Returns the error.
    pub async fn verify_error(self) -> ReactiveError {
        match self.run().await {
            Some(StreamItem::Error(error)) => error,
            Some(StreamItem::Value(value)) => panic!("expected an error, got value {value:?}"),
            None => panic!("expected an error, stream completed"),
        }
    }

    /// Runs the steps, then expects an error satisfying `predicate`.
    pub async fn verify_error_matches<P>(self, predicate: P)
    where
        P: FnOnce(&ReactiveError) -> bool,
    {
        let error = self.verify_error().await;
        assert!(predicate(&error), "error did not match: {error:?}");
    }

    /// Runs the steps, then expects an error whose message is `message`.
    pub async fn verify_error_message(self, message: &str) {
        let error = self.verify_error().await;
        assert_eq!(error.to_string(), message);
    }

    async fn run(mut self) -> Option<StreamItem<T>> {
        let timeout = self.timeout;
        let steps = std::mem::take(&mut self.steps);
        let mut signals = self.signals;

        let verification = async move {
            for (index, step) in steps.into_iter().enumerate() {
                apply_step(&mut signals, index, step).await;
            }
            signals.next().await
        };

        match tokio::time::timeout(timeout, verification).await {
            Ok(terminal) => terminal,
            Err(_) => panic!("verification timed out after {timeout:?}"),
        }
    }
}

async fn apply_step<T: Debug>(
    signals: &mut Peekable<BoxStream<'static, StreamItem<T>>>,
    index: usize,
    step: Step<T>,
) {
    match step {
        Step::Next { description, check } => match signals.next().await {
            Some(StreamItem::Value(value)) => assert!(
                check(&value),
                "step {index}: expected value {description}, got {value:?}"
            ),
            Some(StreamItem::Error(error)) => {
                panic!("step {index}: expected value {description}, got error: {error}")
            }
            None => panic!("step {index}: expected value {description}, stream completed"),
        },
        Step::Count(count) => {
            for seen in 0..count {
                match signals.next().await {
                    Some(StreamItem::Value(_)) => {}
                    Some(StreamItem::Error(error)) => panic!(
                        "step {index}: expected {count} values, got error after {seen}: {error}"
                    ),
                    None => panic!(
                        "step {index}: expected {count} values, stream completed after {seen}"
                    ),
                }
            }
        }
        Step::ConsumeWhile(check) => loop {
            let consume = matches!(
                Pin::new(&mut *signals).peek().await,
                Some(StreamItem::Value(value)) if check(value)
            );
            if !consume {
                break;
            }
            signals.next().await;
        },
    }
}
