//! CryptoCompare REST API client implementation.
//!
//! The [`CryptoCompareClient`] issues one GET per call and hands back the
//! response body as parsed JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use cryptocompare::api::{CryptoCompareClient, HistoMinuteParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptoCompareClient::new()?;
//!
//!     let params = HistoMinuteParams::new("BTC", "USD").with_limit(10);
//!     let body = client.histo_minute(&params).await?;
//!     println!("{}", body["Response"]);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::HistoMinuteParams;
use crate::network::DEFAULT_API_URL;

/// Builder for configuring [`CryptoCompareClient`].
#[derive(Debug, Clone)]
pub struct CryptoCompareClientBuilder {
    base_url: String,
    /// Unset leaves reqwest's own default in place
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl Default for CryptoCompareClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl CryptoCompareClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Override the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout. Without one the HTTP client's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<CryptoCompareClient> {
        let headers = self.header_map()?;

        let mut builder = Client::builder()
            .pool_max_idle_per_host(10)
            .default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(CryptoCompareClient {
            http_client,
            base_url: self.base_url,
        })
    }

    /// Build a synchronous client with the same settings.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> ApiResult<crate::api::blocking::CryptoCompareBlockingClient> {
        let headers = self.header_map()?;

        let mut builder = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(10)
            .default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(crate::api::blocking::CryptoCompareBlockingClient::from_parts(
            http_client,
            self.base_url,
        ))
    }

    fn header_map(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// CryptoCompare REST API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CryptoCompareClient {
    http_client: Client,
    base_url: String,
}

impl CryptoCompareClient {
    /// Create a client against [`DEFAULT_API_URL`] with default settings
    /// (reqwest's default timeout behavior, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        CryptoCompareClientBuilder::default().build()
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        CryptoCompareClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> CryptoCompareClientBuilder {
        CryptoCompareClientBuilder::default()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Historical data endpoints
    // =========================================================================

    /// Get minute OHLCV history for a currency pair.
    ///
    /// Returns the response body exactly as the server sent it. The status
    /// code is not checked; a body that is not JSON fails with
    /// [`ApiError::Json`].
    pub async fn histo_minute(&self, params: &HistoMinuteParams) -> ApiResult<serde_json::Value> {
        let url = params.url(&self.base_url);
        self.get_json(&url).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn get_json(&self, url: &str) -> ApiResult<serde_json::Value> {
        tracing::debug!(url, "Sending GET request");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = %status, bytes = body.len(), "Received response");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CryptoCompareClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_client_builder() {
        let client = CryptoCompareClient::builder()
            .base_url("http://localhost:8080/")
            .timeout_secs(60)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_builder_sets_no_timeout() {
        assert!(CryptoCompareClientBuilder::default().timeout.is_none());
        assert!(CryptoCompareClient::builder().timeout.is_none());
        assert!(CryptoCompareClientBuilder::new("http://localhost:8080").timeout.is_none());
    }

    #[test]
    fn test_timeout_is_opt_in() {
        let builder = CryptoCompareClient::builder().timeout_secs(5);
        assert_eq!(builder.timeout, Some(Duration::from_secs(5)));

        let builder = CryptoCompareClient::builder().timeout(Duration::from_millis(250));
        assert_eq!(builder.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_client_builder_rejects_bad_header() {
        let result = CryptoCompareClient::builder()
            .header("bad header", "value")
            .build();

        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_with_base_url() {
        let client = CryptoCompareClient::with_base_url("http://127.0.0.1:9000").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }
}
