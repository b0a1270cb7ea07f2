//! Limit order with fees
//!
//! ```text
//! m = H(assetIdSell, assetIdBuy)
//! m = H(m, assetIdFee)
//! m = H(m, amountSell:64 | amountBuy:64 | maxAmountFee:64 | nonce:32)
//! m = H(m, discriminant | positionId:64 | positionId:64 | positionId:64 | expirationTimestamp:32 | pad:17)
//! ```
//!
//! The position id fills all three vault slots of the settlement layout.

use types::bitfield::width;
use types::errors::MessageResult;
use types::hash::MessageHash;
use types::operation::OperationKind;
use types::params::LimitOrderParams;

use crate::chain::HashChain;
use crate::encoder::MessageEncoder;
use crate::hash::PairHash;
use crate::packer::Packer;

const LIMIT_ORDER_PADDING_BITS: u32 = 17;

impl<H: PairHash> MessageEncoder<H> {
    /// Four hash invocations.
    ///
    /// Synthetic and collateral fields are validated under their own names and
    /// widths, then relabelled into sell/buy legs by the order direction.
    pub fn limit_order(&self, params: &LimitOrderParams) -> MessageResult<MessageHash> {
        let asset_id_synthetic = self.field(
            "assetIdSynthetic",
            &params.asset_id_synthetic,
            width::ASSET_ID_SYNTHETIC,
        )?;
        let asset_id_collateral = self.field(
            "assetIdCollateral",
            &params.asset_id_collateral,
            width::ASSET_ID,
        )?;
        let asset_id_fee = self.field("assetIdFee", &params.asset_id_fee, width::ASSET_ID)?;
        let amount_synthetic =
            self.field("amountSynthetic", &params.amount_synthetic, width::AMOUNT)?;
        let amount_collateral =
            self.field("amountCollateral", &params.amount_collateral, width::AMOUNT)?;
        let max_amount_fee = self.field("maxAmountFee", &params.max_amount_fee, width::AMOUNT)?;
        let nonce = self.field("nonce", &params.nonce, width::NONCE)?;
        let position_id = self.field("positionId", &params.position_id, width::POSITION_ID)?;
        let expiration_timestamp = self.field(
            "expirationTimestamp",
            &params.expiration_timestamp,
            width::EXPIRATION_TIMESTAMP,
        )?;

        let legs = params.direction().legs(
            asset_id_synthetic,
            asset_id_collateral,
            amount_synthetic,
            amount_collateral,
        );

        let asset_id_sell = legs.asset_id_sell.to_field_element()?;
        let asset_id_buy = legs.asset_id_buy.to_field_element()?;
        let asset_id_fee = asset_id_fee.to_field_element()?;
        let word0 = Packer::new()
            .push(&legs.amount_sell)
            .push(&legs.amount_buy)
            .push(&max_amount_fee)
            .push(&nonce)
            .finish("packedMessage0")?;
        let word1 = Packer::new()
            .push(&OperationKind::LimitOrderWithFees.as_bit_field()?)
            .push(&position_id)
            .push(&position_id)
            .push(&position_id)
            .push(&expiration_timestamp)
            .pad(LIMIT_ORDER_PADDING_BITS)
            .finish("packedMessage1")?;

        let hash = HashChain::start(self.hasher(), &asset_id_sell, &asset_id_buy)
            .absorb(&asset_id_fee)
            .absorb(&word0)
            .absorb(&word1)
            .finish();
        Ok(self.emit("limit_order", hash))
    }
}
