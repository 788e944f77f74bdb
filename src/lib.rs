//! # CryptoCompare Rust Client
//!
//! A small client for the CryptoCompare `histominute` endpoint: minute OHLCV
//! history for a currency pair, returned as the JSON the server sent.
//!
//! ## Modules
//!
//! - [`api`]: REST client, request parameters and the optional typed response view
//! - [`shared`]: exchange-name normalization
//! - [`network`]: endpoint constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptocompare::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptoCompareClient::new()?;
//!
//!     // GET /data/histominute?fsym=BTC&tsym=USD&limit=10&tryConversion=false
//!     let params = HistoMinuteParams::new("BTC", "USD")
//!         .with_limit(10)
//!         .with_try_conversion(false);
//!     let body = client.histo_minute(&params).await?;
//!
//!     let typed = HistoMinuteResponse::from_value(&body)?;
//!     println!("{} candles", typed.data.len());
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared helpers.
pub mod shared;

/// Network URL constants.
pub mod network;

/// REST API client module.
#[cfg(feature = "http")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use cryptocompare::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "http")]
    pub use crate::api::{
        ApiError, ApiResult, Candle, ConversionType, CryptoCompareClient,
        CryptoCompareClientBuilder, HistoMinuteParams, HistoMinuteResponse,
    };

    #[cfg(feature = "blocking")]
    pub use crate::api::CryptoCompareBlockingClient;

    pub use crate::network::{DEFAULT_API_URL, HISTO_MINUTE_PATH};

    pub use crate::shared::{is_known_exchange, normalize_exchange, DEFAULT_EXCHANGE};
}
