// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::state::SubscriptionState;
use crate::subscriber::Subscriber;
use futures::future::{select, Either};
use futures::stream::BoxStream;
use futures::StreamExt;
use reflux_core::{CancellationToken, StreamItem};
use reflux_stream::Publisher;
use std::pin::pin;

/// Subscribes `subscriber` to `publisher` and feeds it every signal.
///
/// Runs until a terminal signal has been delivered or `token` is cancelled,
/// and returns the terminal state reached. On cancellation the upstream is
/// dropped, which tears down every inner subscription it still holds, and
/// the subscriber receives no terminal signal.
///
/// Does not depend on any particular async runtime.
pub async fn drive<T, P, S>(
    publisher: &P,
    subscriber: &mut S,
    token: CancellationToken,
) -> SubscriptionState
where
    T: Send + 'static,
    P: Publisher<T> + ?Sized,
    S: Subscriber<T> + ?Sized,
{
    if token.is_cancelled() {
        return SubscriptionState::Cancelled;
    }
    drive_signals(publisher.signals(), subscriber, token).await
}

pub(crate) async fn drive_signals<T, S>(
    mut signals: BoxStream<'static, StreamItem<T>>,
    subscriber: &mut S,
    token: CancellationToken,
) -> SubscriptionState
where
    T: Send + 'static,
    S: Subscriber<T> + ?Sized,
{
    let mut state = SubscriptionState::Created;
    subscriber.on_subscribe().await;
    state = advance(state, SubscriptionState::Running);

    let mut cancelled = pin!(token.cancelled());
    while !state.is_terminal() {
        let signal = match select(cancelled.as_mut(), signals.next()).await {
            Either::Left(((), _)) => None,
            Either::Right((signal, _)) => Some(signal),
        };

        match signal {
            None => {
                debug!("subscription cancelled");
                state = advance(state, SubscriptionState::Cancelled);
            }
            Some(Some(StreamItem::Value(value))) => subscriber.on_next(value).await,
            Some(Some(StreamItem::Error(error))) => {
                subscriber.on_error(error).await;
                state = advance(state, SubscriptionState::Errored);
            }
            Some(None) => {
                subscriber.on_complete().await;
                state = advance(state, SubscriptionState::Completed);
            }
        }
    }

    drop(signals);
    state
}

fn advance(from: SubscriptionState, to: SubscriptionState) -> SubscriptionState {
    debug!("subscription {:?} -> {:?}", from, to);
    to
}
