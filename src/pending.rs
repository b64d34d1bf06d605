//! Single-settlement results.
//!
//! A [`PendingResult`] is decoupled from the transport's own future: the
//! dispatcher can settle it synchronously (disabled proxy, encode failure) without
//! ever obtaining a transport future. When it does wrap a reply, the
//! continuation runs on whichever task awaits the result, so settlement never
//! leaves the caller's thread and host values need not be `Send`.
//!
//! Settling through a [`Settler`] consumes it, so a result settles at most once;
//! a settler dropped without settling resolves the result as a failure, so no
//! caller waits on an abandoned query.

use crate::proxy::Failure;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

type Outcome<T> = Result<T, Failure>;

enum Source<T> {
    Channel(oneshot::Receiver<Outcome<T>>),
    Reply(LocalBoxFuture<'static, Outcome<T>>),
    Taken,
}

/// Future of one typed query outcome.
#[must_use = "a PendingResult does nothing unless awaited"]
pub struct PendingResult<T> {
    source: Source<T>,
}

/// Write side of a [`PendingResult`].
#[derive(Debug)]
pub struct Settler<T> {
    sender: oneshot::Sender<Outcome<T>>,
}

impl<T> fmt::Debug for PendingResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Channel(_) => "channel",
            Source::Reply(_) => "reply",
            Source::Taken => "taken",
        };
        f.debug_struct("PendingResult")
            .field("source", &source)
            .finish()
    }
}

impl<T> PendingResult<T> {
    /// Unsettled result paired with the settler that completes it.
    pub fn channel() -> (Settler<T>, Self) {
        let (sender, receiver) = oneshot::channel();
        (
            Settler { sender },
            Self {
                source: Source::Channel(receiver),
            },
        )
    }

    /// Result that is already settled.
    pub fn ready(outcome: Outcome<T>) -> Self {
        let (settler, pending) = Self::channel();
        settler.settle(outcome);
        pending
    }

    pub fn failed(failure: Failure) -> Self {
        Self::ready(Err(failure))
    }

    /// Result settled by `reply`, driven by the task that awaits it.
    pub fn from_reply<F>(reply: F) -> Self
    where
        F: Future<Output = Outcome<T>> + 'static,
    {
        Self {
            source: Source::Reply(reply.boxed_local()),
        }
    }

    /// Take the outcome if it is already available, without waiting.
    ///
    /// A reply-backed result is polled once, without registering for wakeups.
    pub fn try_take(&mut self) -> Option<Outcome<T>> {
        let outcome = match &mut self.source {
            Source::Channel(receiver) => match receiver.try_recv() {
                Ok(outcome) => outcome,
                Err(oneshot::error::TryRecvError::Empty) => return None,
                Err(oneshot::error::TryRecvError::Closed) => Err(Failure::abandoned()),
            },
            Source::Reply(reply) => reply.as_mut().now_or_never()?,
            Source::Taken => Err(Failure::abandoned()),
        };
        self.source = Source::Taken;
        Some(outcome)
    }
}

impl<T> Settler<T> {
    /// Complete the paired result. A caller that already dropped its
    /// `PendingResult` simply never observes the outcome.
    pub fn settle(self, outcome: Outcome<T>) {
        let _ = self.sender.send(outcome);
    }

    /// True once the caller dropped its `PendingResult`.
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<T> Future for PendingResult<T> {
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let outcome = match &mut this.source {
            Source::Channel(receiver) => match Pin::new(receiver).poll(cx) {
                Poll::Ready(Ok(outcome)) => outcome,
                Poll::Ready(Err(_)) => Err(Failure::abandoned()),
                Poll::Pending => return Poll::Pending,
            },
            Source::Reply(reply) => match reply.as_mut().poll(cx) {
                Poll::Ready(outcome) => outcome,
                Poll::Pending => return Poll::Pending,
            },
            Source::Taken => Err(Failure::abandoned()),
        };
        this.source = Source::Taken;
        Poll::Ready(outcome)
    }
}
