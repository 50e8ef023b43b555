//! Opaque identifier types for trade records
//!
//! Order ids and instrument symbols arrive verbatim from the exchange
//! export; they are wrapped in newtypes so they cannot be confused with
//! other string-valued fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to an order in the source export
///
/// The exchange assigns these; the engine never generates or interprets
/// them beyond equality and display (warnings name the order id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

impl OrderRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Instrument symbol (e.g. "PERP_BTC_USDT")
///
/// Used as the key for per-instrument position queues. The engine treats
/// the symbol as opaque; prefix filtering happens at the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instrument(String);

impl Instrument {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Instrument {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
