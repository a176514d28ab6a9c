use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::error::Error;
use crate::frame::Frame;

impl DefiLlama {
    /// List all protocols along with their current TVL.
    pub async fn protocols(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.common, constant::PROTOCOLS))
            .await
    }

    /// [`protocols`](Self::protocols) projected into one row per protocol.
    pub async fn protocols_frame(&self) -> Result<Frame, Error> {
        self.frame(format!("{}{}", self.base.common, constant::PROTOCOLS))
            .await
    }

    /// Historical TVL of a protocol with breakdowns by token and chain.
    pub async fn protocol(&self, protocol: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{protocol}",
            self.base.common,
            constant::PROTOCOL
        ))
        .await
    }

    /// Current TVL of a protocol, as a bare number.
    pub async fn protocol_tvl(&self, protocol: &str) -> Result<Value, Error> {
        self.get(format!("{}{}/{protocol}", self.base.common, constant::TVL))
            .await
    }

    /// Historical TVL of DeFi on all chains, excluding liquid staking and
    /// double counting.
    pub async fn historical_chain_tvl(&self) -> Result<Value, Error> {
        self.get(format!(
            "{}{}",
            self.base.common,
            constant::HISTORICAL_CHAIN_TVL
        ))
        .await
    }

    /// Historical TVL of one chain.
    pub async fn chain_historical_tvl(&self, chain: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{chain}",
            self.base.common,
            constant::HISTORICAL_CHAIN_TVL
        ))
        .await
    }

    /// Current TVL of all chains.
    pub async fn chains(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.common, constant::CHAINS))
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
    async fn protocol_url_concatenates_base_path_and_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protocol/uniswap"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Uniswap"})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let value = client.protocol("uniswap").await.unwrap();
        assert_eq!(value["name"], "Uniswap");
    }

    #[tokio::test]
    async fn protocols_frame_is_tabular() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protocols"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Uniswap", "tvl": 1.0},
                {"name": "Aave", "tvl": 2.0},
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let frame = client.protocols_frame().await.unwrap();
        assert_eq!(frame.columns, vec!["name", "tvl"]);
        assert_eq!(frame.len(), 2);
    }

    #[tokio::test]
    async fn chain_tvl_paths_are_versioned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/historicalChainTvl/Ethereum"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.chain_historical_tvl("Ethereum").await.unwrap();
    }
}
