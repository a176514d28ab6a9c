use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::error::Error;

impl DefiLlama {
    /// All DEXs with their volume summaries and historical chart.
    pub async fn dex_overview(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.common, constant::DEX_OVERVIEW))
            .await
    }

    /// Volume summary and historical chart of one DEX protocol.
    pub async fn dex_summary(&self, protocol: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{protocol}",
            self.base.common,
            constant::DEX_SUMMARY
        ))
        .await
    }

    /// Fees and revenue of all protocols.
    pub async fn fees_overview(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.common, constant::FEES_OVERVIEW))
            .await
    }

    /// Fees and revenue of one protocol.
    pub async fn fees_summary(&self, protocol: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{protocol}",
            self.base.common,
            constant::FEES_SUMMARY
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
    async fn dex_summary_url_carries_the_protocol_slug() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary/dexs/uniswap"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total24h": 1.0})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let value = client.dex_summary("uniswap").await.unwrap();
        assert_eq!(value["total24h"], 1.0);
    }

    #[tokio::test]
    async fn fees_overview_hits_the_overview_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/overview/fees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"protocols": []})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.fees_overview().await.unwrap();
    }
}
