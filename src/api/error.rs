//! API error types for the CryptoCompare client.

use thiserror::Error;

/// Errors returned by the CryptoCompare client.
///
/// Failures from the HTTP and JSON layers are wrapped as-is. The HTTP status
/// code is not inspected, so an error page with a JSON body is returned to the
/// caller like any other response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
