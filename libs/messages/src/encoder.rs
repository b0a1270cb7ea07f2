//! Message encoder
//!
//! Owns the injected pair hash and the configuration. The per-operation
//! encoders live in their own modules as `impl` blocks on [`MessageEncoder`].
//!
//! Every encoder validates all of its fields before the first hash call, so
//! a rejected message never reaches the hash collaborator.

use num_bigint::BigInt;
use tracing::debug;
use types::bitfield::BitField;
use types::errors::MessageResult;
use types::field::FieldElement;
use types::hash::MessageHash;
use types::params::Message;

use crate::config::{EncoderConfig, RangeCheckPolicy};
use crate::hash::PairHash;

/// Computes canonical message hashes with an injected pair hash.
///
/// Stateless between calls; share it freely across threads when `H` allows.
#[derive(Debug, Clone)]
pub struct MessageEncoder<H> {
    hasher: H,
    config: EncoderConfig,
}

impl<H: PairHash> MessageEncoder<H> {
    pub fn new(hasher: H) -> Self {
        Self::with_config(hasher, EncoderConfig::default())
    }

    pub fn with_config(hasher: H, config: EncoderConfig) -> Self {
        Self { hasher, config }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Hash any supported message.
    pub fn encode(&self, message: &Message) -> MessageResult<MessageHash> {
        match message {
            Message::Withdrawal(params) => self.withdrawal(params),
            Message::WithdrawalToAddress(params) => self.withdrawal_to_address(params),
            Message::Transfer(params) => self.transfer(params),
            Message::ConditionalTransfer(params) => self.conditional_transfer(params),
            Message::LimitOrder(params) => self.limit_order(params),
            Message::Price(params) => self.price(params),
        }
    }

    /// Range-check one field according to the configured policy.
    pub(crate) fn field(
        &self,
        name: &'static str,
        value: &BigInt,
        width: u32,
    ) -> MessageResult<BitField> {
        let checked = match self.config.range_checks {
            RangeCheckPolicy::Enforce => BitField::new(name, value, width),
            RangeCheckPolicy::FieldOnly => BitField::new_field_bounded(name, value, width),
        };
        if let Err(err) = &checked {
            debug!(field = name, error = %err, "field rejected");
        }
        checked
    }

    pub(crate) fn emit(&self, label: &str, hash: FieldElement) -> MessageHash {
        let hash = MessageHash::new(hash);
        debug!(message = label, hash = %hash, "message encoded");
        hash
    }
}
