//! Property-based tests for the matching engine
//!
//! Checks quantity conservation and sum consistency over arbitrary trade
//! streams, instead of enumerating fixed scenarios.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use pnl_engine::sequence;
use pnl_engine::PnlEngine;
use pnl_types::ids::{Instrument, OrderRef};
use pnl_types::lot::PositionSide;
use pnl_types::numeric::{Price, Quantity};
use pnl_types::trade::{Side, TradeRecord};

#[derive(Debug, Clone)]
struct RawTrade {
    side: String,
    instrument: &'static str,
    executed: u32,
    price: u32,
    fee: u32,
    at_second: u32,
}

fn raw_trade() -> impl Strategy<Value = RawTrade> {
    (
        prop_oneof![
            4 => Just("BUY".to_string()),
            4 => Just("SELL".to_string()),
            1 => Just("HOLD".to_string()),
        ],
        prop_oneof![Just("PERP_BTC_USDT"), Just("PERP_ETH_USDT")],
        0u32..20,
        1u32..1000,
        0u32..3,
        0u32..50,
    )
        .prop_map(|(side, instrument, executed, price, fee, at_second)| RawTrade {
            side,
            instrument,
            executed,
            price,
            fee,
            at_second,
        })
}

fn to_record(index: usize, raw: &RawTrade) -> TradeRecord {
    let qty = Quantity::try_new(Decimal::from(raw.executed)).unwrap();
    TradeRecord {
        order_id: OrderRef::new(format!("ORD-{index}")),
        filled_time: Utc
            .with_ymd_and_hms(2023, 4, 1, 0, 0, 0)
            .unwrap()
            + chrono::Duration::seconds(raw.at_second as i64),
        instrument: Instrument::new(raw.instrument),
        side: raw.side.clone(),
        price: Price::from_u64(raw.price as u64),
        quantity: qty,
        executed_quantity: qty,
        average_price: Price::from_u64(raw.price as u64),
        total_fee: Decimal::from(raw.fee),
        fee_token: "USDT".to_string(),
        status: "FILLED".to_string(),
    }
}

proptest! {
    #[test]
    fn conservation_of_quantity(raws in proptest::collection::vec(raw_trade(), 0..60)) {
        let records: Vec<_> = raws.iter().enumerate().map(|(i, r)| to_record(i, r)).collect();
        let (mut trades, _) = sequence::validate(records);
        sequence::sort_chronological(&mut trades);

        let mut engine = PnlEngine::new();
        let events: Vec<_> = trades.iter().map(|t| engine.apply(t)).collect();

        for symbol in ["PERP_BTC_USDT", "PERP_ETH_USDT"] {
            let instrument = Instrument::new(symbol);

            let mut opened_long = Decimal::ZERO;
            let mut opened_short = Decimal::ZERO;
            let mut closed_long = Decimal::ZERO;
            let mut closed_short = Decimal::ZERO;

            for event in events.iter().filter(|e| e.instrument == instrument) {
                match event.side {
                    // A buy opens longs and closes shorts
                    Side::BUY => {
                        opened_long += event.opened_quantity.as_decimal();
                        closed_short += event.closed_quantity.as_decimal();
                    }
                    Side::SELL => {
                        opened_short += event.opened_quantity.as_decimal();
                        closed_long += event.closed_quantity.as_decimal();
                    }
                }
            }

            let long_open = engine.book().open_quantity(&instrument, PositionSide::LONG);
            let short_open = engine.book().open_quantity(&instrument, PositionSide::SHORT);

            prop_assert_eq!(long_open.as_decimal(), opened_long - closed_long);
            prop_assert_eq!(short_open.as_decimal(), opened_short - closed_short);
        }
    }

    #[test]
    fn total_equals_event_sum_and_survives_filtering(
        raws in proptest::collection::vec(raw_trade(), 0..60),
    ) {
        let records: Vec<_> = raws.iter().enumerate().map(|(i, r)| to_record(i, r)).collect();
        let (mut trades, skipped) = sequence::validate(records);
        sequence::sort_chronological(&mut trades);

        let mut engine = PnlEngine::new();
        let events: Vec<_> = trades.iter().map(|t| engine.apply(t)).collect();

        let event_sum: Decimal = events.iter().map(|e| e.realized_pnl).sum();
        prop_assert_eq!(engine.ledger().total(), event_sum);
        prop_assert_eq!(engine.ledger().unfiltered_sum(), event_sum);

        let report = engine.into_report(skipped);
        let filtered_sum: Decimal = report.realized_by_time.values().copied().sum();
        prop_assert_eq!(filtered_sum, event_sum);
        prop_assert_eq!(report.total, event_sum);
    }

    #[test]
    fn compute_is_deterministic(raws in proptest::collection::vec(raw_trade(), 0..40)) {
        let records: Vec<_> = raws.iter().enumerate().map(|(i, r)| to_record(i, r)).collect();
        let first = pnl_engine::compute(records.clone());
        let second = pnl_engine::compute(records);
        prop_assert_eq!(first, second);
    }
}
