//! Bounded-width message fields
//!
//! A `BitField` is a named value proven to fit its declared width. The only
//! way to obtain one is through the range validator, so the packer can shift
//! and add without masking.

use num_bigint::{BigInt, BigUint};

use crate::errors::MessageResult;
use crate::field::{field_prime, FieldElement};
use crate::numeric::pow2_signed;
use crate::range::checked_unsigned;

/// Declared widths of every logical field, in bits.
pub mod width {
    /// assetId, assetIdFee, assetIdCollateral
    pub const ASSET_ID: u32 = 250;
    pub const ASSET_ID_SYNTHETIC: u32 = 128;
    pub const PUBLIC_KEY: u32 = 251;
    pub const CONDITION: u32 = 251;
    pub const POSITION_ID: u32 = 64;
    pub const AMOUNT: u32 = 64;
    pub const NONCE: u32 = 32;
    pub const EXPIRATION_TIMESTAMP: u32 = 32;
    pub const ETH_ADDRESS: u32 = 160;
    /// Leading slot of a packed word; its width never shifts anything.
    pub const DISCRIMINANT: u32 = 8;

    // Oracle price messages
    pub const ORACLE_NAME: u32 = 40;
    pub const ASSET_PAIR: u32 = 128;
    pub const PRICE: u32 = 120;
    pub const PRICE_TIMESTAMP: u32 = 32;
}

/// A named value with `0 <= value < 2^width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitField {
    name: &'static str,
    value: BigUint,
    width: u32,
}

impl BitField {
    /// Validate `value` against `[0, 2^width)`.
    pub fn new(name: &'static str, value: &BigInt, width: u32) -> MessageResult<Self> {
        let value = checked_unsigned(value, &pow2_signed(width), name)?;
        Ok(Self { name, value, width })
    }

    /// Validate `value` against `[0, P)` only, keeping `width` as its slot size.
    ///
    /// The value may exceed its slot and spill into the next one when packed.
    /// Only for re-deriving hashes of messages validated elsewhere.
    pub fn new_field_bounded(name: &'static str, value: &BigInt, width: u32) -> MessageResult<Self> {
        let value = checked_unsigned(value, &BigInt::from(field_prime()), name)?;
        Ok(Self { name, value, width })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The value as a raw hash input.
    pub fn to_field_element(&self) -> MessageResult<FieldElement> {
        FieldElement::try_from_biguint(self.name, self.value.clone())
    }
}
