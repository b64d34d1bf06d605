//! Optional and sequence combinators.

use super::Codec;
use crate::error::{DecodeError, EncodeError, EncodeErrorKind};
use crate::value::HostValue;

/// "No value" is the undefined sentinel. An explicit null is not `None`; use
/// [`Null`](super::Null) in a union when null is meaningful.
///
/// Nested optionals (`Option<Option<T>>`, `Option<()>`) cannot tell `Some(None)`
/// from `None` on the wire, so a present value that encodes to undefined is
/// refused.
impl<T: Codec> Codec for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_undefined() || T::probe(value)
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        if value.is_undefined() {
            return Ok(None);
        }
        T::decode(value).map(Some)
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        match self {
            Some(inner) => {
                let encoded: V = inner.encode()?;
                if encoded.is_undefined() {
                    return Err(EncodeError::new(EncodeErrorKind::AmbiguousOptional));
                }
                Ok(encoded)
            }
            None => Ok(V::undefined()),
        }
    }
}

/// Ordered, homogeneous list. Probe only checks array-ness; element shapes are
/// verified while decoding.
impl<T: Codec> Codec for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_array()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        let items = value
            .array_items()
            .ok_or_else(|| super::mismatch::<Self, V>(value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::decode(item).map_err(|e| e.at_index(index)))
            .collect()
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        let items = self
            .iter()
            .enumerate()
            .map(|(index, item)| item.encode::<V>().map_err(|e| e.at_index(index)))
            .collect::<Result<Vec<V>, EncodeError>>()?;
        Ok(V::new_array(items))
    }
}
