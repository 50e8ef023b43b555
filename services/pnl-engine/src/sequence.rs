//! Trade validation and chronological sequencing
//!
//! The validator gates on side legality only; every other field is the
//! ingestion boundary's responsibility. Dropped records are warned about
//! and surfaced as skip events, never silently discarded.

use tracing::warn;

use pnl_types::trade::{Trade, TradeRecord};

use crate::events::TradeSkippedEvent;

/// Validate raw records, splitting them into matchable trades and skips
///
/// Relative input order is preserved on both paths.
pub fn validate(records: Vec<TradeRecord>) -> (Vec<Trade>, Vec<TradeSkippedEvent>) {
    let mut trades = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match record.validate() {
            Ok(trade) => trades.push(trade),
            Err(rejected) => {
                warn!(
                    order_id = %rejected.order_id,
                    side = %rejected.side,
                    "skipping trade with unrecognized side",
                );
                skipped.push(TradeSkippedEvent {
                    order_id: rejected.order_id,
                    side: rejected.side,
                });
            }
        }
    }

    (trades, skipped)
}

/// Sort trades ascending by filled time
///
/// The sort is stable: trades sharing a timestamp keep their relative
/// input order, which the matching output depends on.
pub fn sort_chronological(trades: &mut [Trade]) {
    trades.sort_by(|a, b| a.filled_time.cmp(&b.filled_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pnl_types::ids::{Instrument, OrderRef};
    use pnl_types::numeric::{Price, Quantity};
    use rust_decimal::Decimal;

    fn record(id: &str, side: &str, hour: u32) -> TradeRecord {
        TradeRecord {
            order_id: OrderRef::new(id),
            filled_time: Utc.with_ymd_and_hms(2023, 4, 1, hour, 0, 0).unwrap(),
            instrument: Instrument::new("PERP_BTC_USDT"),
            side: side.to_string(),
            price: Price::from_u64(100),
            quantity: Quantity::from_str("1").unwrap(),
            executed_quantity: Quantity::from_str("1").unwrap(),
            average_price: Price::from_u64(100),
            total_fee: Decimal::ZERO,
            fee_token: "USDT".to_string(),
            status: "FILLED".to_string(),
        }
    }

    #[test]
    fn test_validate_splits_by_side() {
        let records = vec![
            record("a", "BUY", 1),
            record("b", "HOLD", 2),
            record("c", "SELL", 3),
        ];

        let (trades, skipped) = validate(records);

        assert_eq!(trades.len(), 2);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].order_id, OrderRef::new("b"));
        assert_eq!(skipped[0].side, "HOLD");
    }

    #[test]
    fn test_sort_chronological_orders_by_filled_time() {
        let (mut trades, _) = validate(vec![
            record("late", "BUY", 9),
            record("early", "BUY", 1),
            record("middle", "SELL", 5),
        ]);

        sort_chronological(&mut trades);

        let ids: Vec<&str> = trades.iter().map(|t| t.order_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let (mut trades, _) = validate(vec![
            record("first", "SELL", 4),
            record("second", "SELL", 4),
            record("third", "BUY", 4),
        ]);

        sort_chronological(&mut trades);

        let ids: Vec<&str> = trades.iter().map(|t| t.order_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
