//! Prime field elements
//!
//! Values are plain unsigned integers known to lie in `[0, P)` with
//! `P = 2^251 + 17 * 2^192 + 1`. No modular reduction happens here: a value
//! that is not already in range is rejected, never reduced.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{MessageError, MessageResult};
use crate::numeric::{parse_integer, parse_magnitude};

/// Byte width of a serialized field element.
pub const FIELD_BYTES: usize = 32;

/// The field prime `2^251 + 17 * 2^192 + 1`.
pub fn field_prime() -> BigUint {
    (BigUint::one() << 251u32) + (BigUint::from(17u32) << 192u32) + BigUint::one()
}

/// An integer in `[0, P)`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// Wrap an unsigned integer, failing with `RangeViolation` when `value >= P`.
    pub fn try_from_biguint(field: &str, value: BigUint) -> MessageResult<Self> {
        let prime = field_prime();
        if value >= prime {
            return Err(MessageError::RangeViolation {
                field: field.to_owned(),
                value: BigInt::from(value),
                low: BigInt::zero(),
                high: BigInt::from(prime),
            });
        }
        Ok(Self(value))
    }

    /// Parse decimal (or `0x` hex) text into a field element.
    pub fn from_dec_str(field: &str, input: &str) -> MessageResult<Self> {
        let value = parse_integer(field, input)?;
        match value.to_biguint() {
            Some(unsigned) => Self::try_from_biguint(field, unsigned),
            None => Err(MessageError::RangeViolation {
                field: field.to_owned(),
                value,
                low: BigInt::zero(),
                high: BigInt::from(field_prime()),
            }),
        }
    }

    /// Parse hex text, with or without `0x`, into a field element.
    pub fn from_hex_str(field: &str, input: &str) -> MessageResult<Self> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        let value = parse_magnitude(digits, 16).ok_or_else(|| {
            MessageError::InvalidInteger {
                field: field.to_owned(),
                input: input.to_owned(),
            }
        })?;
        Self::try_from_biguint(field, value)
    }

    /// Interpret 32 big-endian bytes as a field element.
    pub fn from_be_bytes(field: &str, bytes: &[u8; FIELD_BYTES]) -> MessageResult<Self> {
        Self::try_from_biguint(field, BigUint::from_bytes_be(bytes))
    }

    /// Keep the low 250 bits of 32 big-endian bytes; always a field element.
    pub fn from_be_bytes_masked(mut bytes: [u8; FIELD_BYTES]) -> Self {
        bytes[0] &= 0x03;
        Self(BigUint::from_bytes_be(&bytes))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Big-endian bytes, left-padded to the field width.
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let raw = self.0.to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        // zero encodes as a single 0x00 byte, which is still right-aligned
        out[FIELD_BYTES - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Canonical rendering: 64 lowercase hex chars, no `0x`, zero-padded.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex_str("fieldElement", &text).map_err(serde::de::Error::custom)
    }
}
