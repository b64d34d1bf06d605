//! Codec Triad
//!
//! Every type that crosses the agent boundary implements [`Codec`]: a non-failing
//! shape test (`probe`), a validating `decode`, and an `encode` that builds a fresh
//! host value. Primitives, optionals, sequences, keyed maps and binary objects are
//! implemented here once; structs, tagged unions and literal discriminants are
//! declared with [`codec_struct!`](crate::codec_struct),
//! [`codec_union!`](crate::codec_union) and
//! [`literal_string!`](crate::literal_string).
//!
//! Composition rules:
//! - struct decode reads each field by name and tolerates unknown extra properties
//! - union probe/decode try candidates in declared order and commit to the first
//!   whose `probe` succeeds (first match wins, not most specific match)
//! - optional decode short-circuits on the undefined sentinel
//! - sequence and map probes only check array/object shape; element errors
//!   surface from `decode`

use crate::error::{DecodeError, DecodeErrorKind, EncodeError};
use crate::value::HostValue;

mod binary;
mod collection;
mod macros;
mod primitive;
mod record;

pub use binary::{ArrayBuffer, ArrayBufferView};
pub use primitive::Null;
pub use record::Record;

/// Marshalling contract between one domain type and dynamic host values.
pub trait Codec: Sized {
    /// Label used when a value does not have the expected shape.
    const EXPECTED: &'static str;

    /// True iff the value's shape is compatible with `Self`. Never fails.
    fn probe<V: HostValue>(value: &V) -> bool;

    /// Decode a value, re-validating its shape.
    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError>;

    /// Build a fresh host value.
    fn encode<V: HostValue>(&self) -> Result<V, EncodeError>;
}

/// Shape mismatch against `T`, reporting the value's actual type.
pub fn mismatch<T: Codec, V: HostValue>(value: &V) -> DecodeError {
    DecodeError::mismatch(T::EXPECTED, value.type_name())
}

/// Read a named property, treating a missing key as undefined.
pub fn property<V: HostValue>(value: &V, name: &str) -> V {
    value.get_property(name).unwrap_or_else(V::undefined)
}

/// Decode the struct field `name`.
///
/// A key that is absent altogether is reported as a missing field unless the
/// field type accepts undefined (optionals).
pub fn decode_field<T: Codec, V: HostValue>(
    value: &V,
    name: &'static str,
) -> Result<T, DecodeError> {
    match value.get_property(name) {
        Some(field) => T::decode(&field).map_err(|e| e.at_field(name)),
        None if T::probe(&V::undefined()) => {
            T::decode(&V::undefined()).map_err(|e| e.at_field(name))
        }
        None => Err(DecodeError::missing_field(name)),
    }
}

/// Encode `field` into `object` under `name`. Undefined results are left out so
/// absent optionals do not show up as keys.
pub fn encode_field<T: Codec, V: HostValue>(
    object: &mut V,
    name: &'static str,
    field: &T,
) -> Result<(), EncodeError> {
    let encoded = field.encode::<V>().map_err(|e| e.at_field(name))?;
    if encoded.is_undefined() {
        return Ok(());
    }
    object
        .set_property(name, encoded)
        .map_err(|e| EncodeError::from(e).at_field(name))
}

/// Decode a literal string discriminant.
pub fn decode_literal<V: HostValue>(value: &V, expected: &'static str) -> Result<(), DecodeError> {
    match value.as_string() {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(DecodeError::new(DecodeErrorKind::Literal { expected, found })),
        None => Err(DecodeError::new(DecodeErrorKind::Literal {
            expected,
            found: value.type_name().to_string(),
        })),
    }
}

/// Decode a host value straight from its `Codec`, for callers that prefer the
/// free-function form.
pub fn decode<T: Codec, V: HostValue>(value: &V) -> Result<T, DecodeError> {
    T::decode(value)
}

/// Encode a domain value into the host representation `V`.
pub fn encode<T: Codec, V: HostValue>(value: &T) -> Result<V, EncodeError> {
    value.encode()
}
