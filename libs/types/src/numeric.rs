//! Arbitrary-precision integers for message fields
//!
//! Caller-supplied values are parsed into signed, unbounded `BigInt`s so that
//! negative and oversized inputs survive until the range validator sees them.
//! Nothing here ever wraps or truncates.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Num, Zero};

use crate::errors::{MessageError, MessageResult};

/// `2^bits` as an unsigned integer.
pub fn pow2(bits: u32) -> BigUint {
    BigUint::one() << bits
}

/// `2^bits` as a signed integer, the exclusive upper bound of a `bits`-wide field.
pub fn pow2_signed(bits: u32) -> BigInt {
    BigInt::one() << bits
}

/// Parse `digits` in `radix`, rejecting empty input and anything but digits.
///
/// `BigUint::from_str_radix` alone also takes `+` and `_` separators.
pub(crate) fn parse_magnitude(digits: &str, radix: u32) -> Option<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::from_str_radix(digits, radix).ok()
}

/// Parse an integer from decimal text, or hex text with a `0x` prefix.
///
/// A leading `-` is accepted so that negative inputs reach range validation
/// and fail there with a `RangeViolation` instead of a parse error. No
/// whitespace, `+` sign or digit separators.
pub fn parse_integer(field: &str, input: &str) -> MessageResult<BigInt> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex_digits) => parse_magnitude(hex_digits, 16),
        None => parse_magnitude(digits, 10),
    }
    .ok_or_else(|| MessageError::InvalidInteger {
        field: field.to_owned(),
        input: input.to_owned(),
    })?;

    let sign = if negative && !magnitude.is_zero() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parse hex text, `0x` prefix optional. Bare digits are never read as decimal.
pub fn parse_hex_integer(field: &str, input: &str) -> MessageResult<BigInt> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    parse_magnitude(digits, 16)
        .map(BigInt::from)
        .ok_or_else(|| MessageError::InvalidInteger {
            field: field.to_owned(),
            input: input.to_owned(),
        })
}

/// Serde adapter for `BigInt` fields in parameter records.
///
/// Reads JSON strings (decimal or `0x` hex) and JSON integers; always writes a
/// decimal string so values above `u64::MAX` round-trip through any JSON tool.
pub mod serde_integer {
    use std::fmt;

    use num_bigint::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntegerVisitor)
    }

    struct IntegerVisitor;

    impl<'de> Visitor<'de> for IntegerVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a decimal/0x-hex string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            super::parse_integer("value", v)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

/// Serde adapter for hex-only fields such as L1 addresses.
///
/// Strings are always hex, with or without `0x`; JSON integers are taken as
/// they are. Writes `0x`-prefixed lowercase hex.
pub mod serde_hex_integer {
    use std::fmt;

    use num_bigint::BigInt;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", value.to_str_radix(16)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HexVisitor)
    }

    struct HexVisitor;

    impl<'de> Visitor<'de> for HexVisitor {
        type Value = BigInt;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a hex string or an integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
            Ok(BigInt::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
            super::parse_hex_integer("value", v)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}
