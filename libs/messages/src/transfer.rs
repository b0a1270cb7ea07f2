//! Transfer and conditional transfer messages
//!
//! ```text
//! m = H(assetId, assetIdFee)
//! m = H(m, receiverPublicKey)
//! m = H(m, condition)                      conditional only
//! m = H(m, senderPositionId:64 | receiverPositionId:64 | srcFeePositionId:64 | nonce:32)
//! m = H(m, discriminant | amount:64 | maxAmountFee:64 | expirationTimestamp:32 | pad:81)
//! ```

use types::bitfield::{width, BitField};
use types::errors::MessageResult;
use types::field::FieldElement;
use types::hash::MessageHash;
use types::operation::OperationKind;
use types::params::{ConditionalTransferParams, TransferParams};

use crate::chain::HashChain;
use crate::encoder::MessageEncoder;
use crate::hash::PairHash;
use crate::packer::Packer;

const TRANSFER_PADDING_BITS: u32 = 81;

/// Transfer fields after range validation.
struct CheckedTransfer {
    asset_id: BitField,
    asset_id_fee: BitField,
    receiver_public_key: BitField,
    sender_position_id: BitField,
    receiver_position_id: BitField,
    src_fee_position_id: BitField,
    nonce: BitField,
    amount: BitField,
    max_amount_fee: BitField,
    expiration_timestamp: BitField,
}

impl<H: PairHash> MessageEncoder<H> {
    /// Four hash invocations.
    pub fn transfer(&self, params: &TransferParams) -> MessageResult<MessageHash> {
        let checked = self.check_transfer(params)?;
        let hash = self.transfer_chain(OperationKind::Transfer, &checked, None)?;
        Ok(self.emit("transfer", hash))
    }

    /// Five hash invocations; `condition` is folded in after the receiver key.
    pub fn conditional_transfer(
        &self,
        params: &ConditionalTransferParams,
    ) -> MessageResult<MessageHash> {
        let checked = self.check_transfer(&params.transfer)?;
        let condition = self.field("condition", &params.condition, width::CONDITION)?;
        let hash = self.transfer_chain(
            OperationKind::ConditionalTransfer,
            &checked,
            Some(&condition),
        )?;
        Ok(self.emit("conditional_transfer", hash))
    }

    fn check_transfer(&self, params: &TransferParams) -> MessageResult<CheckedTransfer> {
        Ok(CheckedTransfer {
            asset_id: self.field("assetId", &params.asset_id, width::ASSET_ID)?,
            asset_id_fee: self.field("assetIdFee", &params.asset_id_fee, width::ASSET_ID)?,
            receiver_public_key: self.field(
                "receiverPublicKey",
                &params.receiver_public_key,
                width::PUBLIC_KEY,
            )?,
            sender_position_id: self.field(
                "senderPositionId",
                &params.sender_position_id,
                width::POSITION_ID,
            )?,
            receiver_position_id: self.field(
                "receiverPositionId",
                &params.receiver_position_id,
                width::POSITION_ID,
            )?,
            src_fee_position_id: self.field(
                "srcFeePositionId",
                &params.src_fee_position_id,
                width::POSITION_ID,
            )?,
            nonce: self.field("nonce", &params.nonce, width::NONCE)?,
            amount: self.field("amount", &params.amount, width::AMOUNT)?,
            max_amount_fee: self.field("maxAmountFee", &params.max_amount_fee, width::AMOUNT)?,
            expiration_timestamp: self.field(
                "expirationTimestamp",
                &params.expiration_timestamp,
                width::EXPIRATION_TIMESTAMP,
            )?,
        })
    }

    fn transfer_chain(
        &self,
        kind: OperationKind,
        fields: &CheckedTransfer,
        condition: Option<&BitField>,
    ) -> MessageResult<FieldElement> {
        // Build every hash input first so a failure cannot leave a partial chain.
        let asset_id = fields.asset_id.to_field_element()?;
        let asset_id_fee = fields.asset_id_fee.to_field_element()?;
        let receiver_public_key = fields.receiver_public_key.to_field_element()?;
        let condition = condition.map(BitField::to_field_element).transpose()?;

        let word0 = Packer::new()
            .push(&fields.sender_position_id)
            .push(&fields.receiver_position_id)
            .push(&fields.src_fee_position_id)
            .push(&fields.nonce)
            .finish("packedMessage0")?;
        let word1 = Packer::new()
            .push(&kind.as_bit_field()?)
            .push(&fields.amount)
            .push(&fields.max_amount_fee)
            .push(&fields.expiration_timestamp)
            .pad(TRANSFER_PADDING_BITS)
            .finish("packedMessage1")?;

        let mut chain = HashChain::start(self.hasher(), &asset_id, &asset_id_fee)
            .absorb(&receiver_public_key);
        if let Some(condition) = &condition {
            chain = chain.absorb(condition);
        }
        Ok(chain.absorb(&word0).absorb(&word1).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256PairHash;
    use num_bigint::BigInt;
    use std::cell::Cell;

    fn params() -> TransferParams {
        TransferParams {
            asset_id: BigInt::from(1),
            asset_id_fee: BigInt::from(2),
            receiver_public_key: BigInt::from(3),
            sender_position_id: BigInt::from(4),
            receiver_position_id: BigInt::from(5),
            src_fee_position_id: BigInt::from(6),
            nonce: BigInt::from(7),
            amount: BigInt::from(8),
            max_amount_fee: BigInt::from(9),
            expiration_timestamp: BigInt::from(10),
        }
    }

    #[test]
    fn test_hash_call_counts() {
        let count = Cell::new(0usize);
        let counter = |a: &FieldElement, b: &FieldElement| {
            count.set(count.get() + 1);
            Sha256PairHash.hash(a, b)
        };
        let encoder = MessageEncoder::new(counter);

        encoder.transfer(&params()).unwrap();
        assert_eq!(count.get(), 4);

        count.set(0);
        let conditional = ConditionalTransferParams {
            transfer: params(),
            condition: BigInt::from(11),
        };
        encoder.conditional_transfer(&conditional).unwrap();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_conditional_with_zero_condition_differs_from_transfer() {
        let encoder = MessageEncoder::new(Sha256PairHash);
        let plain = encoder.transfer(&params()).unwrap();
        let conditional = encoder
            .conditional_transfer(&ConditionalTransferParams {
                transfer: params(),
                condition: BigInt::from(0),
            })
            .unwrap();
        assert_ne!(plain, conditional);
    }

    #[test]
    fn test_swapping_sender_and_receiver_changes_hash() {
        let encoder = MessageEncoder::new(Sha256PairHash);
        let mut swapped = params();
        std::mem::swap(
            &mut swapped.sender_position_id,
            &mut swapped.receiver_position_id,
        );
        assert_ne!(
            encoder.transfer(&params()).unwrap(),
            encoder.transfer(&swapped).unwrap()
        );
    }

    #[test]
    fn test_receiver_key_allows_251_bits_asset_only_250() {
        let encoder = MessageEncoder::new(Sha256PairHash);

        let mut wide_key = params();
        wide_key.receiver_public_key = (BigInt::from(1) << 251u32) - 1u32;
        assert!(encoder.transfer(&wide_key).is_ok());

        let mut wide_asset = params();
        wide_asset.asset_id = BigInt::from(1) << 250u32;
        assert_eq!(encoder.transfer(&wide_asset).unwrap_err().field(), "assetId");
    }

    #[test]
    fn test_condition_checked_before_any_hash() {
        let count = Cell::new(0usize);
        let counter = |a: &FieldElement, b: &FieldElement| {
            count.set(count.get() + 1);
            Sha256PairHash.hash(a, b)
        };
        let encoder = MessageEncoder::new(counter);
        let conditional = ConditionalTransferParams {
            transfer: params(),
            condition: BigInt::from(1) << 251u32,
        };
        let err = encoder.conditional_transfer(&conditional).unwrap_err();
        assert_eq!(err.field(), "condition");
        assert_eq!(count.get(), 0);
    }
}
