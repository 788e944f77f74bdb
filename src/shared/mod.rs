//! Shared helpers used by the API clients.

pub mod exchange;

pub use exchange::{is_known_exchange, normalize_exchange, DEFAULT_EXCHANGE};
