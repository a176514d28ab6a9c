use serde_json::Value;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::dispatch::RequestOptions;
use crate::error::Error;

impl DefiLlama {
    /// Look up function and event signatures by their hashes.
    ///
    /// `functions` takes comma-separated 4byte selectors, `events` takes
    /// comma-separated topic hashes; either may be empty.
    pub async fn function_signature(
        &self,
        functions: Option<&str>,
        events: Option<&str>,
    ) -> Result<Value, Error> {
        let url = format!("{}{}", self.base.abi_decoder, constant::FETCH_SIGNATURE);
        let mut opts = RequestOptions::new();
        if let Some(functions) = functions {
            opts = opts.query_param("functions", functions);
        }
        if let Some(events) = events {
            opts = opts.query_param("events", events);
        }
        self.get_with(url, opts).await
    }

    /// Verified contract ABI filtered to the given signatures.
    pub async fn contract_abi(
        &self,
        chain: &str,
        address: &str,
        functions: Option<&str>,
        events: Option<&str>,
    ) -> Result<Value, Error> {
        let url = format!(
            "{}{}/{chain}/{address}",
            self.base.abi_decoder,
            constant::FETCH_CONTRACT
        );
        let mut opts = RequestOptions::new();
        if let Some(functions) = functions {
            opts = opts.query_param("functions", functions);
        }
        if let Some(events) = events {
            opts = opts.query_param("events", events);
        }
        self.get_with(url, opts).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_client;

    #[tokio::test]
    async fn signature_lookup_sends_selectors_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetch/signature"))
            .and(query_param("functions", "0x23b872dd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"functions": {}})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .function_signature(Some("0x23b872dd"), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn contract_abi_orders_chain_before_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/fetch/contract/ethereum/0x02f7bd798e765369a9d204e9095b2a526ef01667",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"functions": {}})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .contract_abi(
                "ethereum",
                "0x02f7bd798e765369a9d204e9095b2a526ef01667",
                None,
                None,
            )
            .await
            .unwrap();
    }
}
