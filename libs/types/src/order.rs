//! Limit order direction
//!
//! A perpetual limit order names a synthetic and a collateral asset plus a
//! direction. The signed message instead names what is sold and what is
//! bought, so the direction decides how the pair is relabelled.

use serde::{Deserialize, Serialize};

/// Which side of the synthetic asset an order takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderDirection {
    /// Pays collateral, receives synthetic
    BuyingSynthetic,
    /// Pays synthetic, receives collateral
    SellingSynthetic,
}

impl OrderDirection {
    pub fn from_is_buying_synthetic(is_buying_synthetic: bool) -> Self {
        if is_buying_synthetic {
            OrderDirection::BuyingSynthetic
        } else {
            OrderDirection::SellingSynthetic
        }
    }

    pub fn is_buying_synthetic(&self) -> bool {
        matches!(self, OrderDirection::BuyingSynthetic)
    }

    /// Get the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            OrderDirection::BuyingSynthetic => OrderDirection::SellingSynthetic,
            OrderDirection::SellingSynthetic => OrderDirection::BuyingSynthetic,
        }
    }

    /// Relabel a synthetic/collateral pair into sell/buy legs.
    pub fn legs<A, N>(
        &self,
        asset_id_synthetic: A,
        asset_id_collateral: A,
        amount_synthetic: N,
        amount_collateral: N,
    ) -> SwapLegs<A, N> {
        match self {
            OrderDirection::BuyingSynthetic => SwapLegs {
                asset_id_sell: asset_id_collateral,
                asset_id_buy: asset_id_synthetic,
                amount_sell: amount_collateral,
                amount_buy: amount_synthetic,
            },
            OrderDirection::SellingSynthetic => SwapLegs {
                asset_id_sell: asset_id_synthetic,
                asset_id_buy: asset_id_collateral,
                amount_sell: amount_synthetic,
                amount_buy: amount_collateral,
            },
        }
    }
}

/// The sell/buy view of an order, as it appears in the signed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapLegs<A, N> {
    pub asset_id_sell: A,
    pub asset_id_buy: A,
    pub amount_sell: N,
    pub amount_buy: N,
}
