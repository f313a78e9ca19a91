//! Client for the Nepal Stock Exchange REST API
//!
//! Thin typed wrappers over the exchange's JSON endpoints. Each method
//! issues one GET and decodes the body into the matching `types` struct.
//! The exchange fronts the API with a certificate that fails verification,
//! so verification is off by default and switchable via [`UpstreamConfig`].

pub mod endpoints;
mod error;

pub use error::ClientError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use types::company::{CompanyInfo, SecurityInfo};
use types::depth::MarketDepth;
use types::index::{GraphPoint, IndexEntry};
use types::leaders::{PriceMover, TradeLeader, TransactionLeader, TurnoverLeader};
use types::market::{LiveMarketEntry, MarketStatus, PriceVolumeEntry, SummaryEntry, SupplyDemand};

/// Default exchange host.
pub const DEFAULT_BASE_URL: &str = "https://www.nepalstock.com";

/// Connection settings for the exchange API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub tls_verify: bool,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tls_verify: false,
            timeout_secs: 30,
        }
    }
}

/// Handle to the exchange API.
pub struct Nepse {
    http: reqwest::Client,
    base_url: String,
}

impl Nepse {
    /// Build a client from connection settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.tls_verify)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Today's market summary rows.
    pub async fn market_summary(&self) -> Result<Vec<SummaryEntry>, ClientError> {
        self.get_json(endpoints::MARKET_SUMMARY).await
    }

    /// The main market index entries.
    pub async fn nepse_index(&self) -> Result<Vec<IndexEntry>, ClientError> {
        self.get_json(endpoints::NEPSE_INDEX).await
    }

    /// All sector sub-indices.
    pub async fn nepse_sub_indices(&self) -> Result<Vec<IndexEntry>, ClientError> {
        self.get_json(endpoints::NEPSE_SUBINDICES).await
    }

    /// Top ten scrips by shares traded.
    pub async fn top_ten_trade_scrips(&self) -> Result<Vec<TradeLeader>, ClientError> {
        self.get_json(endpoints::TOP_TEN_TRADE).await
    }

    /// Top ten scrips by turnover value.
    pub async fn top_ten_turnover_scrips(&self) -> Result<Vec<TurnoverLeader>, ClientError> {
        self.get_json(endpoints::TOP_TEN_TURNOVER).await
    }

    /// Top ten scrips by transaction count.
    pub async fn top_ten_transaction_scrips(&self) -> Result<Vec<TransactionLeader>, ClientError> {
        self.get_json(endpoints::TOP_TEN_TRANSACTION).await
    }

    /// Scrips with the highest positive price change today.
    pub async fn top_gainers(&self) -> Result<Vec<PriceMover>, ClientError> {
        self.get_json(endpoints::TOP_GAINERS).await
    }

    /// Scrips with the highest negative price change today.
    pub async fn top_losers(&self) -> Result<Vec<PriceMover>, ClientError> {
        self.get_json(endpoints::TOP_LOSERS).await
    }

    /// Market-wide buy/sell order interest.
    pub async fn supply_demand(&self) -> Result<SupplyDemand, ClientError> {
        self.get_json(endpoints::SUPPLY_DEMAND).await
    }

    /// Whether the exchange is currently open for trading.
    pub async fn market_open(&self) -> Result<MarketStatus, ClientError> {
        self.get_json(endpoints::MARKET_OPEN).await
    }

    /// All listed companies.
    pub async fn company_list(&self) -> Result<Vec<CompanyInfo>, ClientError> {
        self.get_json(endpoints::COMPANY_LIST).await
    }

    /// All tradable securities.
    pub async fn security_list(&self) -> Result<Vec<SecurityInfo>, ClientError> {
        self.get_json(endpoints::SECURITY_LIST).await
    }

    /// Daily trade statistics for every security.
    pub async fn price_volume(&self) -> Result<Vec<PriceVolumeEntry>, ClientError> {
        self.get_json(endpoints::PRICE_VOLUME).await
    }

    /// Real-time rows for securities currently trading.
    pub async fn live_market(&self) -> Result<Vec<LiveMarketEntry>, ClientError> {
        self.get_json(endpoints::LIVE_MARKET).await
    }

    /// Intraday series of the main index.
    pub async fn daily_index_graph(&self) -> Result<Vec<GraphPoint>, ClientError> {
        self.get_json(endpoints::INDEX_GRAPH).await
    }

    /// Intraday price series for one scrip.
    pub async fn daily_scrip_price_graph(&self, symbol: &str) -> Result<Vec<GraphPoint>, ClientError> {
        let path = format!("{}/{}", endpoints::SCRIP_GRAPH, symbol);
        self.get_json(&path).await
    }

    /// Current order book for one symbol.
    ///
    /// Returns `Ok(None)` when the upstream has no book for the symbol
    /// (404 or a null body).
    pub async fn market_depth(&self, symbol: &str) -> Result<Option<MarketDepth>, ClientError> {
        let path = format!("{}/{}", endpoints::MARKET_DEPTH, symbol);
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await.map_err(|source| ClientError::Request {
            endpoint: path.clone(),
            source,
        })?;

        let status = response.status();
        tracing::debug!(endpoint = %path, %status, "upstream response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ClientError::Status { endpoint: path, status });
        }

        let body = response.text().await.map_err(|source| ClientError::Request {
            endpoint: path.clone(),
            source,
        })?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|source| ClientError::Decode { endpoint: path, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await.map_err(|source| ClientError::Request {
            endpoint: path.to_string(),
            source,
        })?;

        let status = response.status();
        tracing::debug!(endpoint = %path, %status, "upstream response");

        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: path.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| ClientError::Request {
            endpoint: path.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_exchange_host() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.tls_verify);
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..UpstreamConfig::default()
        };
        let client = Nepse::new(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9000");
    }
}
