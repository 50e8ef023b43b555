//! Trade execution records
//!
//! A `TradeRecord` is one row of the filled-order export after numeric and
//! timestamp normalization; its side is still the raw export string. A
//! `Trade` is a record whose side has been validated to BUY or SELL and
//! which is eligible for matching.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{Instrument, OrderRef};
use crate::numeric::{Price, Quantity};

/// Trade side (direction of the execution)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy execution (opens long exposure, closes shorts)
    BUY,
    /// Sell execution (opens short exposure, closes longs)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }

    /// Parse the side string exactly as the export writes it
    ///
    /// Any other value (including different casing) is unrecognized and
    /// causes the record to be skipped by the validator.
    pub fn from_export(value: &str) -> Option<Self> {
        match value {
            "BUY" => Some(Side::BUY),
            "SELL" => Some(Side::SELL),
            _ => None,
        }
    }
}

/// One execution row, immutable once constructed
///
/// Numeric fields are already parsed; `side` is kept raw because side
/// legality is the validator's concern, not the ingestion boundary's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub order_id: OrderRef,
    /// Absolute UTC timestamp, second precision
    pub filled_time: DateTime<Utc>,
    pub instrument: Instrument,
    /// Raw side string from the export ("BUY", "SELL", or anything else)
    pub side: String,
    pub price: Price,
    /// Nominal order quantity
    pub quantity: Quantity,
    /// Quantity actually filled by this execution; this, not `quantity`,
    /// is what the matching engine consumes
    pub executed_quantity: Quantity,
    pub average_price: Price,
    /// Non-negative fee charged for this execution
    pub total_fee: Decimal,
    pub fee_token: String,
    pub status: String,
}

/// A validated execution: side is known to be BUY or SELL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub order_id: OrderRef,
    pub filled_time: DateTime<Utc>,
    pub instrument: Instrument,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub executed_quantity: Quantity,
    pub average_price: Price,
    pub total_fee: Decimal,
    pub fee_token: String,
    pub status: String,
}

impl TradeRecord {
    /// Validate the side, producing a matchable trade
    ///
    /// Returns the record unchanged on the error path so the caller can
    /// report the order id and the offending side value.
    pub fn validate(self) -> Result<Trade, TradeRecord> {
        match Side::from_export(&self.side) {
            Some(side) => Ok(Trade {
                order_id: self.order_id,
                filled_time: self.filled_time,
                instrument: self.instrument,
                side,
                price: self.price,
                quantity: self.quantity,
                executed_quantity: self.executed_quantity,
                average_price: self.average_price,
                total_fee: self.total_fee,
                fee_token: self.fee_token,
                status: self.status,
            }),
            None => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(side: &str) -> TradeRecord {
        TradeRecord {
            order_id: OrderRef::new("ORD-1"),
            filled_time: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
            instrument: Instrument::new("PERP_BTC_USDT"),
            side: side.to_string(),
            price: Price::from_u64(100),
            quantity: Quantity::from_str("10").unwrap(),
            executed_quantity: Quantity::from_str("10").unwrap(),
            average_price: Price::from_u64(100),
            total_fee: Decimal::ZERO,
            fee_token: "USDT".to_string(),
            status: "FILLED".to_string(),
        }
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::BUY.opposite(), Side::SELL);
        assert_eq!(Side::SELL.opposite(), Side::BUY);
    }

    #[test]
    fn test_side_from_export_exact_match() {
        assert_eq!(Side::from_export("BUY"), Some(Side::BUY));
        assert_eq!(Side::from_export("SELL"), Some(Side::SELL));
        assert_eq!(Side::from_export("buy"), None);
        assert_eq!(Side::from_export("HOLD"), None);
        assert_eq!(Side::from_export(""), None);
    }

    #[test]
    fn test_validate_accepts_buy_and_sell() {
        assert_eq!(record("BUY").validate().unwrap().side, Side::BUY);
        assert_eq!(record("SELL").validate().unwrap().side, Side::SELL);
    }

    #[test]
    fn test_validate_returns_record_on_unknown_side() {
        let rejected = record("HOLD").validate().unwrap_err();
        assert_eq!(rejected.side, "HOLD");
        assert_eq!(rejected.order_id.as_str(), "ORD-1");
    }

    #[test]
    fn test_trade_serialization() {
        let trade = record("BUY").validate().unwrap();
        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deserialized);
    }
}
