//! Operation discriminants
//!
//! Each signed operation packs a small tag into its data word so that two
//! operations sharing field values can never hash to the same message.

use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::bitfield::{width, BitField};
use crate::errors::MessageResult;

/// The kinds of operation a user signs.
///
/// Discriminant values are fixed by the verifier and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Tag 3
    LimitOrderWithFees,
    /// Tag 4
    Transfer,
    /// Tag 5
    ConditionalTransfer,
    /// Tag 6
    Withdrawal,
    /// Tag 7
    WithdrawalToAddress,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::LimitOrderWithFees,
        OperationKind::Transfer,
        OperationKind::ConditionalTransfer,
        OperationKind::Withdrawal,
        OperationKind::WithdrawalToAddress,
    ];

    /// Tag packed into the operation's data word
    pub fn discriminant(&self) -> u8 {
        match self {
            OperationKind::LimitOrderWithFees => 3,
            OperationKind::Transfer => 4,
            OperationKind::ConditionalTransfer => 5,
            OperationKind::Withdrawal => 6,
            OperationKind::WithdrawalToAddress => 7,
        }
    }

    /// Inverse of [`OperationKind::discriminant`].
    pub fn from_discriminant(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.discriminant() == tag)
    }

    /// The discriminant as the leading slot of a packed word.
    pub fn as_bit_field(&self) -> MessageResult<BitField> {
        BitField::new(
            "discriminant",
            &BigInt::from(self.discriminant()),
            width::DISCRIMINANT,
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::LimitOrderWithFees => "limit_order_with_fees",
            OperationKind::Transfer => "transfer",
            OperationKind::ConditionalTransfer => "conditional_transfer",
            OperationKind::Withdrawal => "withdrawal",
            OperationKind::WithdrawalToAddress => "withdrawal_to_address",
        };
        f.write_str(name)
    }
}
