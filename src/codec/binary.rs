//! Opaque binary objects. Recognized through the host's binary predicate and
//! passed through untouched.

use super::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::value::{BinaryKind, HostValue, OpaqueBinary};

/// A raw byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBuffer(pub OpaqueBinary);

/// A typed view over a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayBufferView(pub OpaqueBinary);

fn binary_of_kind<V: HostValue>(value: &V, kind: BinaryKind) -> Option<OpaqueBinary> {
    value.as_binary().filter(|binary| binary.kind() == kind)
}

impl Codec for ArrayBuffer {
    const EXPECTED: &'static str = "ArrayBuffer";

    fn probe<V: HostValue>(value: &V) -> bool {
        binary_of_kind(value, BinaryKind::Buffer).is_some()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        binary_of_kind(value, BinaryKind::Buffer)
            .map(ArrayBuffer)
            .ok_or_else(|| super::mismatch::<Self, V>(value))
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::from_binary(self.0.clone()))
    }
}

impl Codec for ArrayBufferView {
    const EXPECTED: &'static str = "ArrayBufferView";

    fn probe<V: HostValue>(value: &V) -> bool {
        binary_of_kind(value, BinaryKind::View).is_some()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        binary_of_kind(value, BinaryKind::View)
            .map(ArrayBufferView)
            .ok_or_else(|| super::mismatch::<Self, V>(value))
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::from_binary(self.0.clone()))
    }
}
