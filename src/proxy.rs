//! Query Dispatcher
//!
//! A [`Proxy`] is bound to one remote manager. Each call builds an envelope,
//! hands it to the agent actor, and returns a [`PendingResult`] that settles once
//! with the decoded result or a classified [`Failure`].
//!
//! Failures detected before anything is sent (disabled proxy, encode failure,
//! actor lookup) settle the result immediately. Once a query is handed to the
//! actor it cannot be withdrawn, and this layer applies no timeout. The reply is
//! decoded by whichever task awaits the result, on that task's thread.

mod failure;
mod translate;

pub use failure::{result_code, AgentError, Failure, FailureKind, DEFAULT_FAILURE_MESSAGE};
pub use translate::{decode_success, rejection, MESSAGE_KEY, RESULT_KEY};

use crate::codec::Codec;
use crate::config::ProxyConfig;
use crate::envelope::EnvelopeBuilder;
use crate::error::BridgeError;
use crate::pending::PendingResult;
use crate::transport::Transport;
use crate::value::HostValue;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, debug_span, info, warn, Instrument};

/// Typed entry to one remote manager.
pub struct Proxy<V> {
    manager_id: String,
    actor_name: String,
    entry_point: String,
    transport: Arc<dyn Transport<V>>,
    disabled: AtomicBool,
}

impl<V> fmt::Debug for Proxy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("manager_id", &self.manager_id)
            .field("actor_name", &self.actor_name)
            .field("entry_point", &self.entry_point)
            .field("disabled", &self.is_disabled())
            .finish_non_exhaustive()
    }
}

impl<V> Proxy<V> {
    pub fn manager_id(&self) -> &str {
        &self.manager_id
    }

    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Refuse all further calls. One-way and idempotent; queries already
    /// dispatched still settle.
    pub fn disable(&self) {
        if !self.disabled.swap(true, Ordering::SeqCst) {
            info!(manager_id = %self.manager_id, "Agent proxy disabled");
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}

impl<V: HostValue + 'static> Proxy<V> {
    /// Proxy using the default actor name and entry point.
    pub fn new(manager_id: impl Into<String>, transport: Arc<dyn Transport<V>>) -> Self {
        Self::with_config(ProxyConfig::new(manager_id), transport)
    }

    /// Proxy addressed by a validated configuration.
    pub fn from_config(
        config: &ProxyConfig,
        transport: Arc<dyn Transport<V>>,
    ) -> Result<Self, BridgeError> {
        config.validate().map_err(BridgeError::ConfigError)?;
        Ok(Self::with_config(config.clone(), transport))
    }

    fn with_config(config: ProxyConfig, transport: Arc<dyn Transport<V>>) -> Self {
        Self {
            manager_id: config.manager_id,
            actor_name: config.actor_name,
            entry_point: config.entry_point,
            transport,
            disabled: AtomicBool::new(false),
        }
    }

    /// Send `group.method` and settle with the raw success payload.
    pub fn call<C: Codec, A: Codec>(
        &self,
        group: &str,
        method: &str,
        context: &C,
        args: Option<&A>,
    ) -> PendingResult<V> {
        self.dispatch(group, method, context, args, Ok::<V, Failure>)
    }

    /// Send `group.method` and decode the success payload as `R`.
    pub fn query<R, C, A>(
        &self,
        group: &str,
        method: &str,
        context: &C,
        args: Option<&A>,
    ) -> PendingResult<R>
    where
        R: Codec + 'static,
        C: Codec,
        A: Codec,
    {
        self.dispatch(group, method, context, args, |payload: V| {
            translate::decode_success::<R, V>(&payload)
        })
    }

    /// Build, send, and arrange for `on_success` to run on the resolved payload.
    /// Rejections are classified by the translator.
    pub(crate) fn dispatch<T, C, A, F>(
        &self,
        group: &str,
        method: &str,
        context: &C,
        args: Option<&A>,
        on_success: F,
    ) -> PendingResult<T>
    where
        T: 'static,
        C: Codec,
        A: Codec,
        F: FnOnce(V) -> Result<T, Failure> + 'static,
    {
        if self.is_disabled() {
            warn!(manager_id = %self.manager_id, group, method, "Query refused: proxy is disabled");
            return PendingResult::failed(Failure::disabled());
        }

        let envelope = match EnvelopeBuilder::new(&self.manager_id, group, method)
            .build::<V, C, A>(context, args)
        {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(group, method, error = %err, "Failed to encode query envelope");
                return PendingResult::failed(Failure::encode(&err));
            }
        };

        let actor = match self.transport.actor(&self.actor_name) {
            Ok(actor) => actor,
            Err(err) => {
                warn!(actor = %self.actor_name, group, method, error = %err, "Agent actor unavailable");
                return PendingResult::failed(Failure::unavailable(&err));
            }
        };

        debug!(
            manager_id = %self.manager_id,
            group,
            method,
            entry_point = %self.entry_point,
            "Dispatching agent query"
        );
        let reply = actor.send_query(&self.entry_point, envelope);

        let span = debug_span!("agent_query", group, method);
        PendingResult::from_reply(
            async move {
                match reply.await {
                    Ok(payload) => on_success(payload),
                    Err(payload) => {
                        let failure = translate::rejection(&payload);
                        debug!(code = failure.code(), "Agent query rejected");
                        Err(failure)
                    }
                }
            }
            .instrument(span),
        )
    }
}
