//! Matching engine core
//!
//! A stateful left-fold over the chronologically sorted trade stream. All
//! state lives in the engine value (position book plus ledger), never in
//! shared mutable accumulators, so independent runs cannot interfere and
//! the reduction is trivially repeatable.

use pnl_types::lot::{Lot, PositionSide};
use pnl_types::trade::{Trade, TradeRecord};

use crate::book::PositionBook;
use crate::events::{RealizedPnlEvent, TradeSkippedEvent};
use crate::ledger::{PnlLedger, PnlReport};
use crate::sequence;

/// FIFO matching engine for one batch run
///
/// Consumes trades one at a time, drives the position book, and records
/// realized PnL into the ledger. There is no rollback: once a trade is
/// applied its effects are permanent for the run.
#[derive(Debug, Clone, Default)]
pub struct PnlEngine {
    book: PositionBook,
    ledger: PnlLedger,
}

impl PnlEngine {
    /// Create an engine with an empty book and ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one validated trade and emit its realized-PnL event
    ///
    /// The executed quantity (not the nominal order quantity) is matched
    /// against the opposite queue at the trade's average price; whatever
    /// cannot be matched opens a new lot carrying the trade's fee.
    pub fn apply(&mut self, trade: &Trade) -> RealizedPnlEvent {
        let opening = PositionSide::opened_by(trade.side);
        let requested = trade.executed_quantity;

        let (remaining, realized_pnl) = self.book.close_against_opposite(
            &trade.instrument,
            opening,
            requested,
            trade.average_price,
            trade.total_fee,
        );

        if !remaining.is_zero() {
            self.book.open_lot(
                &trade.instrument,
                opening,
                Lot::new(remaining, trade.average_price, trade.total_fee),
            );
        }

        self.ledger.record(trade.filled_time, realized_pnl);

        RealizedPnlEvent {
            order_id: trade.order_id.clone(),
            instrument: trade.instrument.clone(),
            executed_at: trade.filled_time,
            side: trade.side,
            closed_quantity: requested.saturating_sub(remaining),
            opened_quantity: remaining,
            realized_pnl,
        }
    }

    /// The position book as it stands mid-run
    pub fn book(&self) -> &PositionBook {
        &self.book
    }

    /// The ledger as it stands mid-run
    pub fn ledger(&self) -> &PnlLedger {
        &self.ledger
    }

    /// Finish the run, folding skip events into the report
    pub fn into_report(self, skipped: Vec<TradeSkippedEvent>) -> PnlReport {
        self.ledger.finalize(skipped)
    }
}

/// Compute realized PnL for a batch of raw trade records
///
/// Validates (dropping records with an unrecognized side), stable-sorts by
/// filled time, folds through a fresh engine, and finalizes the ledger.
/// Deterministic: the same input always yields the same report.
pub fn compute(records: Vec<TradeRecord>) -> PnlReport {
    let (mut trades, skipped) = sequence::validate(records);
    sequence::sort_chronological(&mut trades);

    let mut engine = PnlEngine::new();
    for trade in &trades {
        engine.apply(trade);
    }

    engine.into_report(skipped)
}
