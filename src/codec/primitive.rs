//! Primitive codecs: booleans, numbers, strings, explicit null and unit.
//!
//! All numeric types decode through the host's canonical `f64`, so integral and
//! floating host representations are both accepted. Integer types additionally
//! require an integral, in-range value, in both directions: a 64-bit integer
//! outside the safe range is refused on encode rather than rounded.

use super::{mismatch, Codec};
use crate::error::{DecodeError, DecodeErrorKind, EncodeError, EncodeErrorKind};
use crate::value::HostValue;

impl Codec for bool {
    const EXPECTED: &'static str = "boolean";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_bool()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| mismatch::<Self, V>(value))
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::from_bool(*self))
    }
}

impl Codec for f64 {
    const EXPECTED: &'static str = "number";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_number()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        value.as_f64().ok_or_else(|| mismatch::<Self, V>(value))
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::from_f64(*self))
    }
}

impl Codec for String {
    const EXPECTED: &'static str = "string";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_string()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        value.as_string().ok_or_else(|| mismatch::<Self, V>(value))
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::from_string(self.clone()))
    }
}

// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral<V: HostValue>(
    value: &V,
    expected: &'static str,
    min: f64,
    max: f64,
) -> Result<f64, DecodeError> {
    let number = value
        .as_f64()
        .ok_or_else(|| DecodeError::mismatch(expected, value.type_name()))?;
    if !number.is_finite() || number.fract() != 0.0 {
        return Err(DecodeError::new(DecodeErrorKind::NotInteger(number)));
    }
    if number < min || number > max {
        return Err(DecodeError::new(DecodeErrorKind::OutOfRange {
            value: number,
            target: expected,
        }));
    }
    Ok(number)
}

macro_rules! integer_codec {
    ($ty:ty, $expected:literal, $min:expr, $max:expr) => {
        impl Codec for $ty {
            const EXPECTED: &'static str = $expected;

            fn probe<V: HostValue>(value: &V) -> bool {
                integral(value, $expected, $min, $max).is_ok()
            }

            fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
                integral(value, $expected, $min, $max).map(|n| n as $ty)
            }

            fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
                // Rounding is monotonic, so anything past the safe range is still
                // past it after the cast.
                let number = *self as f64;
                if number < $min || number > $max {
                    return Err(EncodeError::new(EncodeErrorKind::Unrepresentable {
                        value: self.to_string(),
                        target: $expected,
                    }));
                }
                Ok(V::from_f64(number))
            }
        }
    };
}

integer_codec!(u32, "u32", 0.0, f64::from(u32::MAX));
integer_codec!(i64, "i64", -MAX_SAFE_INTEGER, MAX_SAFE_INTEGER);
integer_codec!(u64, "u64", 0.0, MAX_SAFE_INTEGER);

/// The explicit null literal, distinct from an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

impl Codec for Null {
    const EXPECTED: &'static str = "null";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_null()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        if value.is_null() {
            Ok(Null)
        } else {
            Err(mismatch::<Self, V>(value))
        }
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::null())
    }
}

/// No result. Operations without a return value ignore whatever payload the
/// agent resolves with; as arguments it encodes to undefined, which the
/// envelope treats as "no args".
impl Codec for () {
    const EXPECTED: &'static str = "any";

    fn probe<V: HostValue>(_value: &V) -> bool {
        true
    }

    fn decode<V: HostValue>(_value: &V) -> Result<Self, DecodeError> {
        Ok(())
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        Ok(V::undefined())
    }
}
