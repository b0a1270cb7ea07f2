//! Caller-supplied message parameters
//!
//! Every numeric field is an unbounded signed integer: some fields approach
//! 251 bits, and negative or oversized values must reach the range validator
//! intact. JSON keys follow the reference fixture files.

use num_bigint::BigInt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{MessageError, MessageResult};
use crate::numeric::{serde_hex_integer, serde_integer};
use crate::operation::OperationKind;
use crate::order::OrderDirection;

/// Withdrawal of collateral from a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalParams {
    #[serde(with = "serde_integer")]
    pub asset_id_collateral: BigInt,
    #[serde(with = "serde_integer")]
    pub position_id: BigInt,
    #[serde(with = "serde_integer")]
    pub nonce: BigInt,
    #[serde(with = "serde_integer")]
    pub expiration_timestamp: BigInt,
    #[serde(with = "serde_integer")]
    pub amount: BigInt,
}

/// Withdrawal of collateral to a specific L1 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalToAddressParams {
    #[serde(with = "serde_integer")]
    pub asset_id_collateral: BigInt,
    #[serde(with = "serde_integer")]
    pub position_id: BigInt,
    /// 160-bit address; always hex, `0x` optional
    #[serde(with = "serde_hex_integer")]
    pub eth_address: BigInt,
    #[serde(with = "serde_integer")]
    pub nonce: BigInt,
    #[serde(with = "serde_integer")]
    pub expiration_timestamp: BigInt,
    #[serde(with = "serde_integer")]
    pub amount: BigInt,
}

/// Transfer between positions, paying a fee from a third position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    #[serde(with = "serde_integer")]
    pub asset_id: BigInt,
    #[serde(with = "serde_integer")]
    pub asset_id_fee: BigInt,
    #[serde(with = "serde_integer")]
    pub receiver_public_key: BigInt,
    #[serde(with = "serde_integer")]
    pub sender_position_id: BigInt,
    #[serde(with = "serde_integer")]
    pub receiver_position_id: BigInt,
    #[serde(with = "serde_integer", alias = "feePositionId")]
    pub src_fee_position_id: BigInt,
    #[serde(with = "serde_integer")]
    pub nonce: BigInt,
    #[serde(with = "serde_integer")]
    pub amount: BigInt,
    #[serde(with = "serde_integer")]
    pub max_amount_fee: BigInt,
    #[serde(with = "serde_integer")]
    pub expiration_timestamp: BigInt,
}

/// A transfer that only settles once `condition` is registered on L1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalTransferParams {
    #[serde(flatten)]
    pub transfer: TransferParams,
    #[serde(with = "serde_integer")]
    pub condition: BigInt,
}

/// Limit order on a synthetic/collateral market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderParams {
    #[serde(with = "serde_integer")]
    pub asset_id_synthetic: BigInt,
    #[serde(with = "serde_integer")]
    pub asset_id_collateral: BigInt,
    pub is_buying_synthetic: bool,
    #[serde(with = "serde_integer")]
    pub asset_id_fee: BigInt,
    #[serde(with = "serde_integer")]
    pub amount_synthetic: BigInt,
    #[serde(with = "serde_integer")]
    pub amount_collateral: BigInt,
    #[serde(with = "serde_integer", alias = "amountFee")]
    pub max_amount_fee: BigInt,
    #[serde(with = "serde_integer")]
    pub nonce: BigInt,
    #[serde(with = "serde_integer")]
    pub position_id: BigInt,
    #[serde(with = "serde_integer")]
    pub expiration_timestamp: BigInt,
}

impl LimitOrderParams {
    pub fn direction(&self) -> OrderDirection {
        OrderDirection::from_is_buying_synthetic(self.is_buying_synthetic)
    }
}

/// Signed oracle price tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceParams {
    /// e.g. hex of "Maker"
    #[serde(with = "serde_integer")]
    pub oracle_name: BigInt,
    #[serde(with = "serde_integer")]
    pub asset_pair: BigInt,
    /// Seconds since the Unix epoch
    #[serde(with = "serde_integer")]
    pub timestamp: BigInt,
    #[serde(with = "serde_integer")]
    pub price: BigInt,
}

/// Any message this crate family can hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Withdrawal(WithdrawalParams),
    WithdrawalToAddress(WithdrawalToAddressParams),
    Transfer(TransferParams),
    ConditionalTransfer(ConditionalTransferParams),
    LimitOrder(LimitOrderParams),
    Price(PriceParams),
}

impl Message {
    /// Operation tag, or `None` for oracle prices, which carry no discriminant.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        match self {
            Message::Withdrawal(_) => Some(OperationKind::Withdrawal),
            Message::WithdrawalToAddress(_) => Some(OperationKind::WithdrawalToAddress),
            Message::Transfer(_) => Some(OperationKind::Transfer),
            Message::ConditionalTransfer(_) => Some(OperationKind::ConditionalTransfer),
            Message::LimitOrder(_) => Some(OperationKind::LimitOrderWithFees),
            Message::Price(_) => None,
        }
    }
}

/// Deserialize a parameter document, naming the offending key path on failure.
pub fn from_json<T: DeserializeOwned>(json: &str) -> MessageResult<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|err| MessageError::MalformedParams {
        path: err.path().to_string(),
        reason: err.inner().to_string(),
    })
}
