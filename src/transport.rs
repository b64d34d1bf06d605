//! Transport Boundary
//!
//! The actor/message channel that physically carries envelopes to the agent
//! process lives outside this crate. The dispatcher only needs two things from
//! it: look up (or create) the agent actor bound to the caller's execution
//! context, and invoke the actor's query entry point with an envelope.

use crate::error::TransportError;
use futures::future::LocalBoxFuture;
use std::sync::Arc;

/// Eventual outcome of one remote query: the handler's return value, or the
/// payload it rejected with. Polled on the caller's thread.
pub type QueryFuture<V> = LocalBoxFuture<'static, Result<V, V>>;

/// Named channel to the agent process.
pub trait Transport<V> {
    /// Look up or create the actor endpoint named `actor_name`.
    fn actor(&self, actor_name: &str) -> Result<Arc<dyn AgentActor<V>>, TransportError>;
}

/// Remote actor endpoint.
pub trait AgentActor<V> {
    /// Deliver `envelope` to `entry_point`. Delivery starts when this is called;
    /// the returned future only observes the remote outcome.
    fn send_query(&self, entry_point: &str, envelope: V) -> QueryFuture<V>;
}
