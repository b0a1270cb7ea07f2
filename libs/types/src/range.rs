//! Range validator
//!
//! Every logical field passes through here before it is packed or hashed.
//! Packing shifts and adds blindly, so an oversized value would spill into the
//! neighbouring slot without any error; this check is the only guard.

use num_bigint::{BigInt, BigUint};

use crate::errors::{MessageError, MessageResult};

/// Fail with `RangeViolation` unless `low <= value < high`.
pub fn assert_in_range(
    value: &BigInt,
    low: &BigInt,
    high: &BigInt,
    field: &str,
) -> MessageResult<()> {
    if value < low || value >= high {
        return Err(MessageError::RangeViolation {
            field: field.to_owned(),
            value: value.clone(),
            low: low.clone(),
            high: high.clone(),
        });
    }
    Ok(())
}

/// Check `0 <= value < high` and hand back the unsigned value.
pub fn checked_unsigned(value: &BigInt, high: &BigInt, field: &str) -> MessageResult<BigUint> {
    assert_in_range(value, &BigInt::from(0u8), high, field)?;
    // non-negative after the check above
    value
        .to_biguint()
        .ok_or_else(|| MessageError::RangeViolation {
            field: field.to_owned(),
            value: value.clone(),
            low: BigInt::from(0u8),
            high: high.clone(),
        })
}
