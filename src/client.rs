use serde_json::Value;

use crate::api::constant;
use crate::dispatch::{Dispatcher, RequestOptions};
use crate::error::Error;
use crate::frame::Frame;

/// The six DefiLlama sub-API hosts.
///
/// Defaults to the production hosts; overridable to point a client at a
/// test server. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct BaseUrls {
    pub common: String,
    pub coins: String,
    pub stablecoins: String,
    pub yields: String,
    pub abi_decoder: String,
    pub bridges: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            common: constant::COMMON_BASE_URL.to_string(),
            coins: constant::COINS_BASE_URL.to_string(),
            stablecoins: constant::STABLECOINS_BASE_URL.to_string(),
            yields: constant::YIELDS_BASE_URL.to_string(),
            abi_decoder: constant::ABI_DECODER_BASE_URL.to_string(),
            bridges: constant::BRIDGES_BASE_URL.to_string(),
        }
    }
}

/// DefiLlama API client.
///
/// Every endpoint method issues exactly one GET through the shared
/// [`Dispatcher`] and returns untyped JSON (or a [`Frame`] for the tabular
/// variants). The client holds only the base URLs and a cloneable reqwest
/// client, so it is safe to clone and call concurrently.
#[derive(Debug, Clone, Default)]
pub struct DefiLlama {
    pub(crate) base: BaseUrls,
    dispatcher: Dispatcher,
}

impl DefiLlama {
    /// Client against the production DefiLlama hosts.
    pub fn new() -> Self {
        Self::with_base_urls(BaseUrls::default())
    }

    pub fn with_base_urls(base: BaseUrls) -> Self {
        Self {
            base,
            dispatcher: Dispatcher::new(),
        }
    }

    /// GET an arbitrary URL with explicit per-call options.
    ///
    /// Escape hatch for endpoints or query parameters the catalog does not
    /// cover.
    pub async fn get_json(&self, url: &str, opts: &RequestOptions) -> Result<Value, Error> {
        self.dispatcher.get(url, opts).await
    }

    /// GET an arbitrary URL and project the body into a [`Frame`].
    pub async fn get_frame(&self, url: &str, opts: &RequestOptions) -> Result<Frame, Error> {
        self.dispatcher.get_frame(url, opts).await
    }

    pub(crate) async fn get(&self, url: String) -> Result<Value, Error> {
        self.dispatcher.get(&url, &RequestOptions::default()).await
    }

    pub(crate) async fn get_with(&self, url: String, opts: RequestOptions) -> Result<Value, Error> {
        self.dispatcher.get(&url, &opts).await
    }

    pub(crate) async fn frame(&self, url: String) -> Result<Frame, Error> {
        self.dispatcher
            .get_frame(&url, &RequestOptions::default())
            .await
    }
}
