//! Oracle price messages
//!
//! ```text
//! first  = assetPair:128 | oracleName:40
//! second = price:120 | timestamp:32
//! hash   = H(first, second)
//! ```

use types::bitfield::width;
use types::errors::MessageResult;
use types::hash::MessageHash;
use types::params::PriceParams;

use crate::chain::HashChain;
use crate::encoder::MessageEncoder;
use crate::hash::PairHash;
use crate::packer::Packer;

impl<H: PairHash> MessageEncoder<H> {
    pub fn price(&self, params: &PriceParams) -> MessageResult<MessageHash> {
        let oracle_name = self.field("oracleName", &params.oracle_name, width::ORACLE_NAME)?;
        let asset_pair = self.field("assetPair", &params.asset_pair, width::ASSET_PAIR)?;
        let timestamp = self.field("timestamp", &params.timestamp, width::PRICE_TIMESTAMP)?;
        let price = self.field("price", &params.price, width::PRICE)?;

        let first = Packer::new()
            .push(&asset_pair)
            .push(&oracle_name)
            .finish("firstNumber")?;
        let second = Packer::new()
            .push(&price)
            .push(&timestamp)
            .finish("secondNumber")?;

        let hash = HashChain::start(self.hasher(), &first, &second).finish();
        Ok(self.emit("price", hash))
    }
}
