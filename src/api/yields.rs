use serde_json::Value;
use tracing::error;

use crate::api::constant;
use crate::client::DefiLlama;
use crate::error::Error;
use crate::frame::Frame;

impl DefiLlama {
    /// Latest data for all yield pools, including enriched predictions.
    pub async fn pools(&self) -> Result<Value, Error> {
        self.get(format!("{}{}", self.base.yields, constant::POOLS))
            .await
    }

    /// [`pools`](Self::pools) projected into one row per pool.
    ///
    /// The payload nests the pool list under a `data` field; the projection
    /// therefore runs on that field, not on the envelope.
    pub async fn pools_frame(&self) -> Result<Frame, Error> {
        let url = format!("{}{}", self.base.yields, constant::POOLS);
        let mut value = self.get(url.clone()).await?;
        let data = value.get_mut("data").map(Value::take).ok_or_else(|| {
            let e = Error::Shape("missing \"data\" field".to_string());
            error!("shape error for {url}: {e}");
            e
        })?;
        crate::dispatch::project(&url, data)
    }

    /// Historical APY and TVL of a pool.
    ///
    /// `pool` is the DefiLlama pool id (a UUID from [`pools`](Self::pools)).
    pub async fn pool_chart(&self, pool: &str) -> Result<Value, Error> {
        self.get(format!(
            "{}{}/{pool}",
            self.base.yields,
            constant::POOL_CHART
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
    async fn pools_frame_projects_the_data_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": [
                    {"pool": "aa70268e", "apy": 3.2},
                    {"pool": "bb81379f", "apy": 5.9},
                ],
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let frame = client.pools_frame().await.unwrap();
        assert_eq!(frame.columns, vec!["pool", "apy"]);
        assert_eq!(frame.len(), 2);
    }

    #[tokio::test]
    async fn pools_frame_without_data_field_is_a_logged_shape_error() {
        let (buffer, _guard) = crate::dispatch::log_capture::capture();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "error"})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.pools_frame().await.unwrap_err();
        assert!(matches!(err, crate::error::Error::Shape(_)), "got {err:?}");
        assert_eq!(buffer.contents().matches("shape error").count(), 1);
    }

    #[tokio::test]
    async fn pools_frame_with_non_row_data_is_a_logged_shape_error() {
        let (buffer, _guard) = crate::dispatch::log_capture::capture();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pools"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "data": 42})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.pools_frame().await.unwrap_err();
        assert!(matches!(err, crate::error::Error::Shape(_)), "got {err:?}");
        assert_eq!(buffer.contents().matches("shape error").count(), 1);
    }

    #[tokio::test]
    async fn pool_chart_url_carries_the_pool_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chart/aa70268e-4a99-4a96-a76c-d563b80b9d51"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .pool_chart("aa70268e-4a99-4a96-a76c-d563b80b9d51")
            .await
            .unwrap();
    }
}
