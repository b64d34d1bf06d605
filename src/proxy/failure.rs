//! Classified query failures.

use crate::error::{DecodeError, EncodeError, TransportError};
use thiserror::Error;

/// Numeric result codes carried by failures.
pub mod result_code {
    /// No code was supplied.
    pub const UNKNOWN: i64 = 0;
    pub const INVALID_STATE: i64 = 11;
    /// The only code classified as an abort.
    pub const ABORT: i64 = 20;
}

/// Message used when a failure carries none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";

/// The two ways a [`Failure`] is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Abort,
    InvalidState,
}

/// A query that did not produce its typed result: a remote rejection, a
/// dispatch failure, or a response that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("agent query failed (code {code}): {}", .message.as_deref().unwrap_or(DEFAULT_FAILURE_MESSAGE))]
pub struct Failure {
    code: i64,
    message: Option<String>,
}

impl Failure {
    pub fn new(code: i64, message: Option<String>) -> Self {
        Self { code, message }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(result_code::INVALID_STATE, Some(message.into()))
    }

    pub fn abort(message: impl Into<String>) -> Self {
        Self::new(result_code::ABORT, Some(message.into()))
    }

    pub(crate) fn disabled() -> Self {
        Self::invalid_state("Agent proxy is disabled")
    }

    pub(crate) fn unavailable(err: &TransportError) -> Self {
        Self::invalid_state(err.to_string())
    }

    pub(crate) fn encode(err: &EncodeError) -> Self {
        Self::invalid_state(format!("Failed to encode request: {}", err))
    }

    pub(crate) fn decode(err: &DecodeError) -> Self {
        Self::invalid_state(format!("Failed to decode response: {}", err))
    }

    pub(crate) fn abandoned() -> Self {
        Self::invalid_state("Query abandoned before it settled")
    }

    pub fn kind(&self) -> FailureKind {
        if self.code == result_code::ABORT {
            FailureKind::Abort
        } else {
            FailureKind::InvalidState
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// User-facing error kind a [`Failure`] converts into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("Operation aborted: {0}")]
    Abort(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<Failure> for AgentError {
    fn from(failure: Failure) -> Self {
        let kind = failure.kind();
        let message = failure
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        match kind {
            FailureKind::Abort => AgentError::Abort(message),
            FailureKind::InvalidState => AgentError::InvalidState(message),
        }
    }
}
