//! REST API client module for CryptoCompare.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cryptocompare::api::{CryptoCompareClient, HistoMinuteParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptoCompareClient::new()?;
//!
//!     let params = HistoMinuteParams::new("BTC", "USD")
//!         .with_exchange("coinbase")
//!         .with_limit(10)
//!         .with_try_conversion(false);
//!
//!     let body = client.histo_minute(&params).await?;
//!     println!("{} points", body["Data"].as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use cryptocompare::api::CryptoCompareClient;
//! use std::time::Duration;
//!
//! let client = CryptoCompareClient::builder()
//!     .base_url("https://min-api.cryptocompare.com")
//!     .timeout(Duration::from_secs(10))
//!     .header("X-Custom-Header", "value")
//!     .build()?;
//! ```
//!
//! # Typed Access
//!
//! The client returns [`serde_json::Value`]. Use [`HistoMinuteResponse`] to
//! get structured candles:
//!
//! ```rust,ignore
//! let typed = HistoMinuteResponse::from_value(&body)?;
//! for candle in &typed.data {
//!     println!("{} close={}", candle.time, candle.close);
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(feature = "blocking")]
pub mod blocking;

// Re-export main types for convenience
#[cfg(feature = "blocking")]
pub use blocking::CryptoCompareBlockingClient;
pub use client::{CryptoCompareClient, CryptoCompareClientBuilder};
pub use error::{ApiError, ApiResult};
pub use types::*;
