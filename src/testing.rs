//! Transport doubles for tests.
//!
//! [`RecordingTransport`] records every envelope handed to its actor and answers
//! with scripted replies: queued one-shot replies first, then the default reply.
//! Replies can also be deferred and settled by the test at a chosen point.

use crate::error::TransportError;
use crate::transport::{AgentActor, QueryFuture, Transport};
use crate::value::HostValue;
use futures::future::{self, FutureExt};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;

/// One envelope delivered to the actor.
#[derive(Debug, Clone)]
pub struct SentQuery<V> {
    pub actor_name: String,
    pub entry_point: String,
    pub envelope: V,
}

enum Reply<V> {
    Settled(Result<V, V>),
    Deferred(oneshot::Receiver<Result<V, V>>),
    Never,
}

struct State<V> {
    available: bool,
    lookups: usize,
    sent: Vec<SentQuery<V>>,
    queued: VecDeque<Reply<V>>,
    default_reply: Option<Result<V, V>>,
}

/// Transport double. Clones share state, so a test can keep one handle while the
/// proxy owns another.
pub struct RecordingTransport<V> {
    state: Arc<Mutex<State<V>>>,
}

impl<V> Clone for RecordingTransport<V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<V: HostValue + 'static> Default for RecordingTransport<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: HostValue + 'static> RecordingTransport<V> {
    /// Queries stay pending forever unless a reply is queued.
    pub fn new() -> Self {
        Self::with_default(None)
    }

    /// Every query resolves with `payload`.
    pub fn resolving(payload: V) -> Self {
        Self::with_default(Some(Ok(payload)))
    }

    /// Every query rejects with `payload`.
    pub fn rejecting(payload: V) -> Self {
        Self::with_default(Some(Err(payload)))
    }

    fn with_default(default_reply: Option<Result<V, V>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                available: true,
                lookups: 0,
                sent: Vec::new(),
                queued: VecDeque::new(),
                default_reply,
            })),
        }
    }

    /// Make actor lookups fail (or succeed again).
    pub fn set_available(&self, available: bool) {
        self.state.lock().available = available;
    }

    pub fn push_resolve(&self, payload: V) {
        self.state.lock().queued.push_back(Reply::Settled(Ok(payload)));
    }

    pub fn push_reject(&self, payload: V) {
        self.state.lock().queued.push_back(Reply::Settled(Err(payload)));
    }

    /// The next query without a queued reply never settles.
    pub fn push_never(&self) {
        self.state.lock().queued.push_back(Reply::Never);
    }

    /// Queue a reply the test settles later through the returned handle.
    pub fn defer_next(&self) -> DeferredReply<V> {
        let (sender, receiver) = oneshot::channel();
        self.state.lock().queued.push_back(Reply::Deferred(receiver));
        DeferredReply { sender }
    }

    pub fn sent(&self) -> Vec<SentQuery<V>> {
        self.state.lock().sent.clone()
    }

    pub fn sent_count(&self) -> usize {
        self.state.lock().sent.len()
    }

    /// Number of actor lookups, successful or not.
    pub fn lookup_count(&self) -> usize {
        self.state.lock().lookups
    }
}

impl<V: HostValue + 'static> Transport<V> for RecordingTransport<V> {
    fn actor(&self, actor_name: &str) -> Result<Arc<dyn AgentActor<V>>, TransportError> {
        let mut state = self.state.lock();
        state.lookups += 1;
        if !state.available {
            return Err(TransportError::ActorUnavailable(actor_name.to_string()));
        }
        Ok(Arc::new(RecordingActor {
            actor_name: actor_name.to_string(),
            state: Arc::clone(&self.state),
        }))
    }
}

struct RecordingActor<V> {
    actor_name: String,
    state: Arc<Mutex<State<V>>>,
}

impl<V: HostValue + 'static> AgentActor<V> for RecordingActor<V> {
    fn send_query(&self, entry_point: &str, envelope: V) -> QueryFuture<V> {
        let reply = {
            let mut state = self.state.lock();
            state.sent.push(SentQuery {
                actor_name: self.actor_name.clone(),
                entry_point: entry_point.to_string(),
                envelope,
            });
            match state.queued.pop_front() {
                Some(reply) => reply,
                None => match &state.default_reply {
                    Some(outcome) => Reply::Settled(outcome.clone()),
                    None => Reply::Never,
                },
            }
        };

        match reply {
            Reply::Settled(outcome) => future::ready(outcome).boxed_local(),
            // A dropped handle rejects with undefined.
            Reply::Deferred(receiver) => receiver
                .map(|outcome| outcome.unwrap_or_else(|_| Err(V::undefined())))
                .boxed_local(),
            Reply::Never => future::pending().boxed_local(),
        }
    }
}

/// Settles one deferred reply.
pub struct DeferredReply<V> {
    sender: oneshot::Sender<Result<V, V>>,
}

impl<V> DeferredReply<V> {
    pub fn resolve(self, payload: V) {
        let _ = self.sender.send(Ok(payload));
    }

    pub fn reject(self, payload: V) {
        let _ = self.sender.send(Err(payload));
    }
}
