//! Turns remote outcomes into typed results or classified failures.

use super::failure::{result_code, Failure};
use crate::codec::Codec;
use crate::value::HostValue;
use tracing::warn;

/// Rejection payload key holding the numeric result code.
pub const RESULT_KEY: &str = "result";
/// Rejection payload key holding the human-readable message.
pub const MESSAGE_KEY: &str = "message";

/// Decode a success payload. Decode errors never reach the caller as such.
pub fn decode_success<R: Codec, V: HostValue>(payload: &V) -> Result<R, Failure> {
    R::decode(payload).map_err(|err| {
        warn!(
            expected = R::EXPECTED,
            error = %err,
            "Agent response did not match the expected shape"
        );
        Failure::decode(&err)
    })
}

/// Classify a rejection payload. Both fields are optional; anything that is not
/// an object, or fields of the wrong type, fall back to the defaults.
pub fn rejection<V: HostValue>(payload: &V) -> Failure {
    let code = payload
        .get_property(RESULT_KEY)
        .and_then(|value| i64::decode(&value).ok())
        .unwrap_or(result_code::UNKNOWN);
    let message = payload
        .get_property(MESSAGE_KEY)
        .and_then(|value| String::decode(&value).ok());
    Failure::new(code, message)
}
