//! Bit-packer
//!
//! Concatenates range-checked fields into one word by repeated
//! shift-and-add. Order matters: the same fields in a different order give a
//! different word. The packer never masks; `BitField` construction already
//! guaranteed every value fits its slot.

use num_bigint::BigUint;
use types::bitfield::BitField;
use types::errors::MessageResult;
use types::field::FieldElement;

/// `(accumulator << field.width) + field.value`
pub fn pack(accumulator: &BigUint, field: &BitField) -> BigUint {
    (accumulator << field.width()) + field.value()
}

/// Builder for one packed word.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    accumulator: BigUint,
    layout_bits: u64,
}

impl Packer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `field` in the next slot.
    pub fn push(mut self, field: &BitField) -> Self {
        self.accumulator = pack(&self.accumulator, field);
        self.layout_bits += u64::from(field.width());
        self
    }

    /// Shift left by `bits` with nothing added.
    pub fn pad(mut self, bits: u32) -> Self {
        self.accumulator <<= bits;
        self.layout_bits += u64::from(bits);
        self
    }

    pub fn value(&self) -> &BigUint {
        &self.accumulator
    }

    /// Sum of all slot widths and padding pushed so far.
    pub fn layout_bits(&self) -> u64 {
        self.layout_bits
    }

    /// The packed word as a field element named `name`.
    pub fn finish(self, name: &str) -> MessageResult<FieldElement> {
        FieldElement::try_from_biguint(name, self.accumulator)
    }
}
