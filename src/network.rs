//! Network URL constants for the CryptoCompare API.

/// Default REST API base URL for CryptoCompare.
pub const DEFAULT_API_URL: &str = "https://min-api.cryptocompare.com";

/// Path of the minute-resolution OHLCV endpoint.
pub const HISTO_MINUTE_PATH: &str = "/data/histominute";
