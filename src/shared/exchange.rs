//! Exchange-name normalization.
//!
//! CryptoCompare matches the `e` query parameter against its own spelling of
//! each exchange (`Coinbase`, `HitBTC`, `itBit`, ...). Callers usually have a
//! lowercase or uppercase name at hand, so names are looked up case-insensitively
//! and rewritten to the canonical form.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Aggregate index used by CryptoCompare when no exchange is given.
pub const DEFAULT_EXCHANGE: &str = "CCCAGG";

lazy_static! {
    /// Uppercased exchange name -> canonical CryptoCompare spelling.
    static ref EXCHANGES: HashMap<&'static str, &'static str> = [
        ("BITBAY", "BitBay"),
        ("BITFINEX", "Bitfinex"),
        ("BITSQUARE", "Bitsquare"),
        ("BITSTAMP", "Bitstamp"),
        ("BITTREX", "Bittrex"),
        ("BLEUTRADE", "Bleutrade"),
        ("BTC38", "BTC38"),
        ("BTCC", "BTCC"),
        ("BTCE", "BTCE"),
        ("BTCMARKETS", "BTCMarkets"),
        ("BTCXINDIA", "BTCXIndia"),
        ("BTER", "BTER"),
        ("CCCAGG", "CCCAGG"),
        ("CCEDK", "CCEDK"),
        ("CEXIO", "Cexio"),
        ("COINBASE", "Coinbase"),
        ("COINFLOOR", "Coinfloor"),
        ("COINSETTER", "Coinsetter"),
        ("CRYPTOPIA", "Cryptopia"),
        ("CRYPTSY", "Cryptsy"),
        ("EXMO", "Exmo"),
        ("GEMINI", "Gemini"),
        ("HITBTC", "HitBTC"),
        ("HUOBI", "Huobi"),
        ("ITBIT", "itBit"),
        ("KRAKEN", "Kraken"),
        ("LAKEBTC", "LakeBTC"),
        ("LIQUI", "Liqui"),
        ("LOCALBITCOINS", "LocalBitcoins"),
        ("MONETAGO", "MonetaGo"),
        ("OKCOIN", "OKCoin"),
        ("POLONIEX", "Poloniex"),
        ("QUADRIGACX", "QuadrigaCX"),
        ("QUOINE", "Quoine"),
        ("TIDEX", "Tidex"),
        ("WAVESDEX", "WavesDEX"),
        ("YACUNA", "Yacuna"),
        ("YOBIT", "Yobit"),
        ("YUNBI", "Yunbi"),
    ]
    .into_iter()
    .collect();
}

/// Normalize an exchange name to the spelling CryptoCompare expects.
///
/// Lookup ignores case and surrounding whitespace. Unknown names are returned
/// unchanged (trimmed only) so newly listed exchanges still work.
///
/// ```rust,ignore
/// assert_eq!(normalize_exchange("coinbase"), "Coinbase");
/// assert_eq!(normalize_exchange("HITBTC"), "HitBTC");
/// assert_eq!(normalize_exchange("Binance"), "Binance");
/// ```
pub fn normalize_exchange(name: &str) -> String {
    let trimmed = name.trim();
    EXCHANGES
        .get(trimmed.to_ascii_uppercase().as_str())
        .map(|canonical| (*canonical).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Whether the exchange is in the built-in table.
pub fn is_known_exchange(name: &str) -> bool {
    EXCHANGES.contains_key(name.trim().to_ascii_uppercase().as_str())
}
