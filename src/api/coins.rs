use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::dispatch::RequestOptions;
use crate::error::Error;

/// Token identifiers are `{chain}:{address}` pairs, comma-separated, e.g.
/// `ethereum:0xdF574c24545E5FfEcb9a659c229253D4111d87e1`. CoinGecko ids are
/// accepted as `coingecko:{id}`.
impl DefiLlama {
    /// Current prices of tokens by contract address.
    pub async fn current_prices(&self, coins: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{coins}",
            self.base.coins,
            constant::PRICES_CURRENT
        ))
        .await
    }

    /// Token prices at a point in time.
    pub async fn historical_prices(
        &self,
        timestamp: DateTime<Utc>,
        coins: &str,
    ) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{}/{coins}",
            self.base.coins,
            constant::PRICES_HISTORICAL,
            timestamp.timestamp()
        ))
        .await
    }

    /// Historical prices for multiple tokens at multiple timestamps.
    ///
    /// `coins` is a JSON object mapping token identifiers to arrays of unix
    /// timestamps, passed through as a query parameter.
    pub async fn batch_historical_prices(&self, coins: &str) -> Result<Value, Error> {
        let url = format!("{}{}", self.base.coins, constant::BATCH_HISTORICAL);
        let opts = RequestOptions::new().query_param("coins", coins);
        self.get_with(url, opts).await
    }

    /// Token prices at regular intervals.
    pub async fn price_chart(&self, coins: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{coins}",
            self.base.coins,
            constant::PRICE_CHART
        ))
        .await
    }

    /// Percentage change in token prices over the last 24 hours.
    pub async fn price_percentage(&self, coins: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{coins}",
            self.base.coins,
            constant::PRICE_PERCENTAGE
        ))
        .await
    }

    /// Earliest recorded price of tokens.
    pub async fn first_prices(&self, coins: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{coins}",
            self.base.coins,
            constant::PRICES_FIRST
        ))
        .await
    }

    /// Closest block to a timestamp on a chain.
    pub async fn nearest_block(
        &self,
        chain: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{chain}/{}",
            self.base.coins,
            constant::BLOCK,
            timestamp.timestamp()
        ))
        .await
    }
}
