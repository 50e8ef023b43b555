//! Event structures for the matching engine
//!
//! One realized-PnL event is emitted per processed trade; the ledger
//! aggregates them by timestamp. A skip event is emitted for each record
//! the validator drops.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pnl_types::ids::{Instrument, OrderRef};
use pnl_types::numeric::Quantity;
use pnl_types::trade::Side;

/// Realized-PnL event for one processed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizedPnlEvent {
    pub order_id: OrderRef,
    pub instrument: Instrument,
    pub executed_at: DateTime<Utc>,
    pub side: Side,
    /// Quantity matched against opposite-side lots
    pub closed_quantity: Quantity,
    /// Quantity left over after matching, opened as a new lot
    pub opened_quantity: Quantity,
    /// PnL realized by this trade, fees included (may be zero)
    pub realized_pnl: Decimal,
}

/// A record the validator dropped because of an unrecognized side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSkippedEvent {
    pub order_id: OrderRef,
    /// The offending side value, verbatim
    pub side: String,
}
