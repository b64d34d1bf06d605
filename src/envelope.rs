//! Request Envelope
//!
//! One composite object per call, the only thing handed to the transport:
//!
//! ```text
//! { managerId, group, method, context, args? }
//! ```
//!
//! `args` is left out entirely when the request has no arguments.

use crate::codec::Codec;
use crate::error::EncodeError;
use crate::value::HostValue;

pub const MANAGER_ID_KEY: &str = "managerId";
pub const GROUP_KEY: &str = "group";
pub const METHOD_KEY: &str = "method";
pub const CONTEXT_KEY: &str = "context";
pub const ARGS_KEY: &str = "args";

/// Addressing part of an envelope: which manager, and which operation on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeBuilder<'a> {
    manager_id: &'a str,
    group: &'a str,
    method: &'a str,
}

impl<'a> EnvelopeBuilder<'a> {
    pub fn new(manager_id: &'a str, group: &'a str, method: &'a str) -> Self {
        Self {
            manager_id,
            group,
            method,
        }
    }

    pub fn group(&self) -> &'a str {
        self.group
    }

    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Encode context and args independently and assemble the envelope.
    pub fn build<V, C, A>(&self, context: &C, args: Option<&A>) -> Result<V, EncodeError>
    where
        V: HostValue,
        C: Codec,
        A: Codec,
    {
        let context = context
            .encode::<V>()
            .map_err(|e| e.at_field(CONTEXT_KEY))?;
        let args = match args {
            Some(args) => Some(args.encode::<V>().map_err(|e| e.at_field(ARGS_KEY))?),
            None => None,
        };

        let mut envelope = V::new_object();
        envelope.set_property(MANAGER_ID_KEY, V::from_string(self.manager_id.to_string()))?;
        envelope.set_property(GROUP_KEY, V::from_string(self.group.to_string()))?;
        envelope.set_property(METHOD_KEY, V::from_string(self.method.to_string()))?;
        envelope
            .set_property(CONTEXT_KEY, context)
            .map_err(|e| EncodeError::from(e).at_field(CONTEXT_KEY))?;
        if let Some(args) = args.filter(|args| !args.is_undefined()) {
            envelope
                .set_property(ARGS_KEY, args)
                .map_err(|e| EncodeError::from(e).at_field(ARGS_KEY))?;
        }
        Ok(envelope)
    }
}
