//! Synchronous CryptoCompare client on `reqwest::blocking`.
//!
//! Same behavior as [`CryptoCompareClient`](crate::api::CryptoCompareClient),
//! one blocking GET per call. Must not be used from inside an async runtime.
//!
//! ```rust,ignore
//! use cryptocompare::api::{CryptoCompareBlockingClient, HistoMinuteParams};
//!
//! let client = CryptoCompareBlockingClient::new()?;
//! let body = client.histo_minute(&HistoMinuteParams::new("BTC", "USD"))?;
//! ```

use reqwest::blocking::Client;

use crate::api::client::CryptoCompareClientBuilder;
use crate::api::error::ApiResult;
use crate::api::types::HistoMinuteParams;

/// Blocking CryptoCompare REST API client.
#[derive(Debug, Clone)]
pub struct CryptoCompareBlockingClient {
    http_client: Client,
    base_url: String,
}

impl CryptoCompareBlockingClient {
    /// Create a client against the default API URL.
    pub fn new() -> ApiResult<Self> {
        CryptoCompareClientBuilder::default().build_blocking()
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        CryptoCompareClientBuilder::new(base_url).build_blocking()
    }

    pub(crate) fn from_parts(http_client: Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get minute OHLCV history for a currency pair.
    pub fn histo_minute(&self, params: &HistoMinuteParams) -> ApiResult<serde_json::Value> {
        let url = params.url(&self.base_url);
        tracing::debug!(url = %url, "Sending blocking GET request");

        let response = self.http_client.get(&url).send()?;
        let status = response.status();
        let body = response.bytes()?;

        tracing::debug!(status = %status, bytes = body.len(), "Received response");

        Ok(serde_json::from_slice(&body)?)
    }
}
