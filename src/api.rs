//! Endpoint catalog: one method per DefiLlama endpoint, grouped by sub-API.
//!
//! Every method is a pure URL substitution over one of the six base hosts,
//! delegating to the shared dispatcher. No validation, pagination or
//! post-processing happens here.

pub mod constant;

mod abi;
mod bridges;
mod coins;
mod stablecoins;
mod tvl;
mod volumes;
mod yields;

/// Client with all six hosts pointed at one mock server.
#[cfg(test)]
pub(crate) fn test_client(uri: &str) -> crate::client::DefiLlama {
    crate::client::DefiLlama::with_base_urls(crate::client::BaseUrls {
        common: uri.to_string(),
        coins: uri.to_string(),
        stablecoins: uri.to_string(),
        yields: uri.to_string(),
        abi_decoder: uri.to_string(),
        bridges: uri.to_string(),
    })
}
