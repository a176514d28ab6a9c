use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::error::Error;

impl DefiLlama {
    /// List all bridges along with summaries of recent volumes.
    pub async fn bridges(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.bridges, constant::BRIDGES))
            .await
    }

    /// Summary of bridge volume and volume breakdown by chain.
    pub async fn bridge(&self, id: u32) -> Result<Value, Error> {
        self.get(format!("{}{}/{id}", self.base.bridges, constant::BRIDGE))
            .await
    }

    /// Historical volumes for a chain. `chain` may be `all` for the total.
    pub async fn bridge_volume(&self, chain: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{chain}",
            self.base.bridges,
            constant::BRIDGE_VOLUME
        ))
        .await
    }

    /// 24h token and address volume breakdown for a chain, for the UTC day
    /// starting at `timestamp`.
    pub async fn bridge_day_stats(
        &self,
        timestamp: DateTime<Utc>,
        chain: &str,
    ) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{}/{chain}",
            self.base.bridges,
            constant::BRIDGE_DAY_STATS,
            timestamp.timestamp()
        ))
        .await
    }

    /// All transactions for a bridge.
    pub async fn bridge_transactions(&self, id: u32) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{id}",
            self.base.bridges,
            constant::BRIDGE_TRANSACTIONS
        ))
        .await
    }
}
