//! Agent Bridge: Typed Queries over Dynamic Values
//!
//! Lets a sandboxed component send strongly-typed requests to an out-of-process
//! agent. Requests and results cross the boundary as untyped host values; the
//! [`codec`] layer probes, decodes and encodes them, and the [`proxy`] layer
//! dispatches envelopes through a [`transport`] and settles typed results.

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod ops;
pub mod pending;
pub mod proxy;
pub mod schema;
pub mod testing;
pub mod transport;
pub mod value;

pub use codec::Codec;
pub use error::{
    BridgeError, DecodeError, EncodeError, EncodeErrorKind, HostError, TransportError,
};
pub use pending::PendingResult;
pub use proxy::{AgentError, Failure, FailureKind, Proxy};
pub use value::{HostValue, Value};
