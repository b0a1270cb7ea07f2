//! Encoder configuration

/// How strictly field values are checked before packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheckPolicy {
    /// Every field must fit its declared width.
    Enforce,
    /// Fields need only be non-negative field elements. Oversized values
    /// spill into neighbouring slots, so this is only for re-deriving hashes of
    /// messages whose fields were already validated elsewhere.
    FieldOnly,
}

/// Configuration for a [`MessageEncoder`](crate::encoder::MessageEncoder).
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    pub range_checks: RangeCheckPolicy,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            range_checks: RangeCheckPolicy::Enforce,
        }
    }
}
