//! Histominute request and response types for the CryptoCompare API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::network::HISTO_MINUTE_PATH;
use crate::shared::normalize_exchange;

/// Query parameters for GET /data/histominute.
///
/// Every optional field is sent only when set. Values are passed through as
/// given; bounds such as the documented `limit` maximum of 2000 are left to
/// the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoMinuteParams {
    /// Base currency symbol, sent as `fsym` (required)
    pub from_sym: String,
    /// Quote currency symbol, sent as `tsym` (required)
    pub to_sym: String,
    /// Exchange name, normalized and sent as `e`. Server default: CCCAGG
    pub exchange: Option<String>,
    /// Number of data points, sent as `limit`. Server default 1440, max 2000
    pub limit: Option<u32>,
    /// Minutes combined into one data point, sent as `aggregate`
    pub aggregate: Option<u32>,
    /// Last timestamp to return (unix seconds), sent as `toTs`
    pub to_ts: Option<i64>,
    /// Convert through BTC when the pair does not trade directly.
    /// Only `Some(false)` is sent; the server defaults to `true`.
    pub try_conversion: Option<bool>,
}

impl HistoMinuteParams {
    /// Create new params with the required symbol pair.
    pub fn new(from_sym: impl Into<String>, to_sym: impl Into<String>) -> Self {
        Self {
            from_sym: from_sym.into(),
            to_sym: to_sym.into(),
            ..Default::default()
        }
    }

    /// Set the exchange.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Set result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set aggregation window.
    pub fn with_aggregate(mut self, aggregate: u32) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    /// Set end timestamp (unix seconds).
    pub fn with_to_ts(mut self, to_ts: i64) -> Self {
        self.to_ts = Some(to_ts);
        self
    }

    /// Set the try-conversion flag.
    pub fn with_try_conversion(mut self, try_conversion: bool) -> Self {
        self.try_conversion = Some(try_conversion);
        self
    }

    /// Ordered query parameters as sent on the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("fsym", self.from_sym.clone()),
            ("tsym", self.to_sym.clone()),
        ];

        if let Some(exchange) = &self.exchange {
            pairs.push(("e", normalize_exchange(exchange)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(aggregate) = self.aggregate {
            pairs.push(("aggregate", aggregate.to_string()));
        }
        if let Some(to_ts) = self.to_ts {
            pairs.push(("toTs", to_ts.to_string()));
        }
        if self.try_conversion == Some(false) {
            pairs.push(("tryConversion", "false".to_string()));
        }

        pairs
    }

    /// Form-encoded query string, without the leading `?`. Spaces become `+`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.query_pairs())
            .expect("a sequence of (&str, String) pairs always form-encodes")
    }

    /// Full request URL against the given base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}{}?{}",
            base_url.trim_end_matches('/'),
            HISTO_MINUTE_PATH,
            self.to_query_string()
        )
    }
}

/// One minute (or aggregated) OHLCV record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval start (unix seconds)
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// Highest price in the interval
    pub high: f64,
    /// Lowest price in the interval
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Volume in the base currency
    #[serde(rename = "volumefrom")]
    pub volume_from: f64,
    /// Volume in the quote currency
    #[serde(rename = "volumeto")]
    pub volume_to: f64,
}

impl Candle {
    /// Interval start as a UTC datetime.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// How the server priced the pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionType {
    /// `direct`, `invert`, `multiply`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Intermediate symbol when the pair was converted
    #[serde(rename = "conversionSymbol", default)]
    pub conversion_symbol: String,
}

/// Typed view of a histominute response.
///
/// The client returns the raw [`serde_json::Value`]; this type is opt-in for
/// callers that want structured access. Error responses from the server carry
/// `Response: "Error"` and a `Message`, with most other fields absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoMinuteResponse {
    /// `Success` or `Error`
    pub response: String,
    /// Error description, present when `response` is `Error`
    #[serde(default)]
    pub message: Option<String>,
    /// Server status code (100 on success)
    #[serde(rename = "Type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub aggregated: Option<bool>,
    #[serde(default)]
    pub data: Vec<Candle>,
    #[serde(default)]
    pub time_to: Option<i64>,
    #[serde(default)]
    pub time_from: Option<i64>,
    #[serde(default)]
    pub first_value_in_array: Option<bool>,
    #[serde(default)]
    pub conversion_type: Option<ConversionType>,
}

impl HistoMinuteResponse {
    /// Deserialize from a raw response value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Whether the server reported success.
    pub fn is_success(&self) -> bool {
        self.response == "Success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_required_only() {
        let params = HistoMinuteParams::new("BTC", "USD");
        assert_eq!(params.to_query_string(), "fsym=BTC&tsym=USD");
    }

    #[test]
    fn test_query_all_options_in_order() {
        let params = HistoMinuteParams::new("ETH", "EUR")
            .with_exchange("kraken")
            .with_limit(60)
            .with_aggregate(5)
            .with_to_ts(1502259360)
            .with_try_conversion(false);

        assert_eq!(
            params.to_query_string(),
            "fsym=ETH&tsym=EUR&e=Kraken&limit=60&aggregate=5&toTs=1502259360&tryConversion=false"
        );
    }

    #[test]
    fn test_limit_not_clamped() {
        let params = HistoMinuteParams::new("BTC", "USD").with_limit(5000);
        assert!(params.to_query_string().contains("limit=5000"));
    }

    #[test]
    fn test_try_conversion_true_omitted() {
        let params = HistoMinuteParams::new("BTC", "USD").with_try_conversion(true);
        assert!(!params.to_query_string().contains("tryConversion"));
    }

    #[test]
    fn test_exchange_is_normalized() {
        let params = HistoMinuteParams::new("BTC", "USD").with_exchange("coinbase");
        let pairs = params.query_pairs();
        assert_eq!(pairs[2], ("e", "Coinbase".to_string()));
    }

    #[test]
    fn test_symbols_are_encoded() {
        let params = HistoMinuteParams::new("BTC", "US D&x");
        assert_eq!(params.to_query_string(), "fsym=BTC&tsym=US+D%26x");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let params = HistoMinuteParams::new("BTC", "USD");
        assert_eq!(
            params.url("https://min-api.cryptocompare.com/"),
            "https://min-api.cryptocompare.com/data/histominute?fsym=BTC&tsym=USD"
        );
    }

    #[test]
    fn test_response_from_value() {
        let value = serde_json::json!({
            "Response": "Success",
            "Type": 100,
            "Aggregated": false,
            "Data": [
                {
                    "time": 1502259120,
                    "close": 3396.44,
                    "high": 3397.63,
                    "low": 3396.34,
                    "open": 3397.39,
                    "volumefrom": 98.2,
                    "volumeto": 335485
                }
            ],
            "TimeTo": 1502259360,
            "TimeFrom": 1502259120,
            "FirstValueInArray": true,
            "ConversionType": { "type": "direct", "conversionSymbol": "" }
        });

        let response = HistoMinuteResponse::from_value(&value).unwrap();
        assert!(response.is_success());
        assert_eq!(response.kind, Some(100));
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].volume_to, 335485.0);
        assert_eq!(response.time_from, Some(1502259120));
        assert_eq!(response.conversion_type.unwrap().kind, "direct");
    }

    #[test]
    fn test_error_response_from_value() {
        let value = serde_json::json!({
            "Response": "Error",
            "Message": "There is no data for the symbol XYZ .",
            "Type": 1,
            "Aggregated": false,
            "Data": []
        });

        let response = HistoMinuteResponse::from_value(&value).unwrap();
        assert!(!response.is_success());
        assert!(response.message.unwrap().contains("no data"));
        assert!(response.conversion_type.is_none());
    }

    #[test]
    fn test_candle_datetime() {
        let candle = Candle {
            time: 1502259120,
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume_from: 0.0,
            volume_to: 0.0,
        };
        let dt = candle.datetime().unwrap();
        assert_eq!(dt.timestamp(), 1502259120);
    }
}
