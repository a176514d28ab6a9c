use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::error::Error;

impl DefiLlama {
    /// List all stablecoins along with their circulating amounts.
    pub async fn stablecoins(&self) -> Result<Value, Error> {
        self.get(format!(
            "{}{}",
            self.base.stablecoins,
            constant::STABLECOINS
        ))
        .await
    }

    /// Historical market cap sum of all stablecoins.
    pub async fn stablecoin_charts(&self) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/all",
            self.base.stablecoins,
            constant::STABLECOIN_CHARTS
        ))
        .await
    }

    /// Historical market cap sum of all stablecoins on one chain.
    pub async fn stablecoin_chain_charts(&self, chain: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{chain}",
            self.base.stablecoins,
            constant::STABLECOIN_CHARTS
        ))
        .await
    }

    /// Historical market cap and chain distribution of one stablecoin.
    ///
    /// `asset` is the DefiLlama stablecoin id, e.g. `1` for USDT.
    pub async fn stablecoin(&self, asset: u32) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{asset}",
            self.base.stablecoins,
            constant::STABLECOIN
        ))
        .await
    }

    /// Current market cap sum of all stablecoins on each chain.
    pub async fn stablecoin_chains(&self) -> Result<Value, Error> {
        self.get(format!(
            "{}{}",
            self.base.stablecoins,
            constant::STABLECOIN_CHAINS
        ))
        .await
    }

    /// Historical prices of all stablecoins.
    pub async fn stablecoin_prices(&self) -> Result<Value, Error> {
        self.get(format!(
            "{}{}",
            self.base.stablecoins,
            constant::STABLECOIN_PRICES
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_client;

    #[tokio::test]
    async fn stablecoin_url_carries_the_numeric_asset_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stablecoin/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Tether"})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let value = client.stablecoin(1).await.unwrap();
        assert_eq!(value["name"], "Tether");
    }

    #[tokio::test]
    async fn aggregate_charts_use_the_all_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stablecoincharts/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.stablecoin_charts().await.unwrap();
    }
}
