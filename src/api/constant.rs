//! Base hosts and path segments of the DefiLlama sub-APIs.
//!
//! https://defillama.com/docs/api

/// TVL and protocol data. All general requests should target this domain.
pub const COMMON_BASE_URL: &str = "https://api.llama.fi";

/// Token price data.
pub const COINS_BASE_URL: &str = "https://coins.llama.fi";

/// Stablecoin circulation and price data.
pub const STABLECOINS_BASE_URL: &str = "https://stablecoins.llama.fi";

/// Yield pool data.
pub const YIELDS_BASE_URL: &str = "https://yields.llama.fi";

/// Contract ABI lookup by signature.
pub const ABI_DECODER_BASE_URL: &str = "https://abi-decoder.llama.fi";

/// Bridge volume and transaction data.
pub const BRIDGES_BASE_URL: &str = "https://bridges.llama.fi";

// -- api.llama.fi --

/// List all protocols on DefiLlama along with their TVL.
pub const PROTOCOLS: &str = "/protocols";

/// Historical TVL of a protocol with breakdowns by token and chain.
pub const PROTOCOL: &str = "/protocol";

/// Current TVL of a protocol, as a bare number.
pub const TVL: &str = "/tvl";

/// Historical TVL of DeFi on all chains, or of a single chain.
pub const HISTORICAL_CHAIN_TVL: &str = "/v2/historicalChainTvl";

/// Current TVL of all chains.
pub const CHAINS: &str = "/v2/chains";

/// List all DEXs (or one protocol summary) with volume data.
pub const DEX_OVERVIEW: &str = "/overview/dexs";
pub const DEX_SUMMARY: &str = "/summary/dexs";

/// Fees and revenue, aggregated or per protocol.
pub const FEES_OVERVIEW: &str = "/overview/fees";
pub const FEES_SUMMARY: &str = "/summary/fees";

// -- coins.llama.fi --

/// Current prices of tokens by contract address.
pub const PRICES_CURRENT: &str = "/prices/current";

/// Historical prices of tokens at a unix timestamp.
pub const PRICES_HISTORICAL: &str = "/prices/historical";

/// Historical prices for multiple tokens at multiple timestamps.
pub const BATCH_HISTORICAL: &str = "/batchHistorical";

/// Token prices at regular intervals.
pub const PRICE_CHART: &str = "/chart";

/// Percentage change in price over time.
pub const PRICE_PERCENTAGE: &str = "/percentage";

/// Earliest recorded price of tokens.
pub const PRICES_FIRST: &str = "/prices/first";

/// Closest block to a timestamp on a chain.
pub const BLOCK: &str = "/block";

// -- stablecoins.llama.fi --

/// List all stablecoins along with their circulating amounts.
pub const STABLECOINS: &str = "/stablecoins";

/// Historical market cap sum of all stablecoins, optionally per chain.
pub const STABLECOIN_CHARTS: &str = "/stablecoincharts";

/// Historical market cap and chain distribution of one stablecoin.
pub const STABLECOIN: &str = "/stablecoin";

/// Current market cap sum of all stablecoins on each chain.
pub const STABLECOIN_CHAINS: &str = "/stablecoinchains";

/// Historical prices of all stablecoins.
pub const STABLECOIN_PRICES: &str = "/stablecoinprices";

// -- yields.llama.fi --

/// Latest data for all yield pools.
pub const POOLS: &str = "/pools";

/// Historical APY and TVL of a pool.
pub const POOL_CHART: &str = "/chart";

// -- abi-decoder.llama.fi --

/// Look up function or event signatures by 4byte/topic hash.
pub const FETCH_SIGNATURE: &str = "/fetch/signature";

/// Verified contract ABI filtered to the given signatures.
pub const FETCH_CONTRACT: &str = "/fetch/contract";

// -- bridges.llama.fi --

/// List all bridges along with summaries of recent volumes.
pub const BRIDGES: &str = "/bridges";

/// Summary of bridge volume and volume breakdown by chain.
pub const BRIDGE: &str = "/bridge";

/// Historical volumes for a bridge, chain, or bridge on a chain.
pub const BRIDGE_VOLUME: &str = "/bridgevolume";

/// 24h token and address volume breakdown for a bridge.
pub const BRIDGE_DAY_STATS: &str = "/bridgedaystats";

/// All transactions for a bridge.
pub const BRIDGE_TRANSACTIONS: &str = "/transactions";
