//! Withdrawal messages
//!
//! Data word layout (most significant first):
//!
//! | discriminant | positionId:64 | nonce:32 | amount:64 | expirationTimestamp:32 | pad:49 |

use types::bitfield::width;
use types::errors::MessageResult;
use types::hash::MessageHash;
use types::operation::OperationKind;
use types::params::{WithdrawalParams, WithdrawalToAddressParams};

use crate::chain::HashChain;
use crate::encoder::MessageEncoder;
use crate::hash::PairHash;
use crate::packer::Packer;

const WITHDRAWAL_PADDING_BITS: u32 = 49;

impl<H: PairHash> MessageEncoder<H> {
    /// `H(assetIdCollateral, word)`
    pub fn withdrawal(&self, params: &WithdrawalParams) -> MessageResult<MessageHash> {
        let asset_id_collateral = self.field(
            "assetIdCollateral",
            &params.asset_id_collateral,
            width::ASSET_ID,
        )?;
        let nonce = self.field("nonce", &params.nonce, width::NONCE)?;
        let position_id = self.field("positionId", &params.position_id, width::POSITION_ID)?;
        let expiration_timestamp = self.field(
            "expirationTimestamp",
            &params.expiration_timestamp,
            width::EXPIRATION_TIMESTAMP,
        )?;
        let amount = self.field("amount", &params.amount, width::AMOUNT)?;

        let word = Packer::new()
            .push(&OperationKind::Withdrawal.as_bit_field()?)
            .push(&position_id)
            .push(&nonce)
            .push(&amount)
            .push(&expiration_timestamp)
            .pad(WITHDRAWAL_PADDING_BITS)
            .finish("packedMessage")?;

        let hash = HashChain::start(
            self.hasher(),
            &asset_id_collateral.to_field_element()?,
            &word,
        )
        .finish();
        Ok(self.emit("withdrawal", hash))
    }

    /// `H(H(assetIdCollateral, ethAddress), word)`
    pub fn withdrawal_to_address(
        &self,
        params: &WithdrawalToAddressParams,
    ) -> MessageResult<MessageHash> {
        let asset_id_collateral = self.field(
            "assetIdCollateral",
            &params.asset_id_collateral,
            width::ASSET_ID,
        )?;
        let nonce = self.field("nonce", &params.nonce, width::NONCE)?;
        let position_id = self.field("positionId", &params.position_id, width::POSITION_ID)?;
        let expiration_timestamp = self.field(
            "expirationTimestamp",
            &params.expiration_timestamp,
            width::EXPIRATION_TIMESTAMP,
        )?;
        let amount = self.field("amount", &params.amount, width::AMOUNT)?;
        let eth_address = self.field("ethAddress", &params.eth_address, width::ETH_ADDRESS)?;

        let word = Packer::new()
            .push(&OperationKind::WithdrawalToAddress.as_bit_field()?)
            .push(&position_id)
            .push(&nonce)
            .push(&amount)
            .push(&expiration_timestamp)
            .pad(WITHDRAWAL_PADDING_BITS)
            .finish("packedMessage")?;

        let hash = HashChain::start(
            self.hasher(),
            &asset_id_collateral.to_field_element()?,
            &eth_address.to_field_element()?,
        )
        .absorb(&word)
        .finish();
        Ok(self.emit("withdrawal_to_address", hash))
    }
}
