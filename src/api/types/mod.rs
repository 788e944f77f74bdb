//! Request and response types for the CryptoCompare REST API.

pub mod histo_minute;

pub use histo_minute::*;
