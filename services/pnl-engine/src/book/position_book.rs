//! Per-instrument position book
//!
//! Maps each instrument to a long queue and a short queue of open lots.
//! The book does not enforce netting: both queues may transiently hold
//! lots when opens and closes interleave without full flattening. It only
//! enforces FIFO order within each side.

use std::collections::HashMap;

use rust_decimal::Decimal;

use pnl_types::ids::Instrument;
use pnl_types::lot::{Lot, PositionSide};
use pnl_types::numeric::{Price, Quantity};

use super::lot_queue::LotQueue;

/// Open lots per instrument, split by side
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    books: HashMap<Instrument, InstrumentBook>,
}

#[derive(Debug, Clone, Default)]
struct InstrumentBook {
    long: LotQueue,
    short: LotQueue,
}

impl InstrumentBook {
    fn queue_mut(&mut self, side: PositionSide) -> &mut LotQueue {
        match side {
            PositionSide::LONG => &mut self.long,
            PositionSide::SHORT => &mut self.short,
        }
    }

    fn queue(&self, side: PositionSide) -> &LotQueue {
        match side {
            PositionSide::LONG => &self.long,
            PositionSide::SHORT => &self.short,
        }
    }
}

impl PositionBook {
    /// Create a new empty position book
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }

    /// Append a newly opened lot at the tail of the named side's queue
    pub fn open_lot(&mut self, instrument: &Instrument, side: PositionSide, lot: Lot) {
        self.books
            .entry(instrument.clone())
            .or_default()
            .queue_mut(side)
            .open(lot);
    }

    /// Close `requested` units against the queue opposite to `opening`
    ///
    /// Pops head lots from the opposite queue while quantity remains and
    /// lots are available. Each consumed lot realizes
    /// `(exit − entry) × closed_quantity` signed so a profitable long or
    /// short reports a positive number, minus the closing trade's fee.
    /// The entire `trade_fee` is subtracted once per lot consumed, so a
    /// close that sweeps several queued lots counts the fee several times.
    ///
    /// A partially consumed head lot is split; the remainder is reinserted
    /// at the head and keeps its matching priority.
    ///
    /// Returns the unmatched quantity and the realized PnL for this close.
    pub fn close_against_opposite(
        &mut self,
        instrument: &Instrument,
        opening: PositionSide,
        requested: Quantity,
        closing_price: Price,
        trade_fee: Decimal,
    ) -> (Quantity, Decimal) {
        let closing = opening.opposite();
        let queue = self
            .books
            .entry(instrument.clone())
            .or_default()
            .queue_mut(closing);

        let mut remaining = requested;
        let mut realized = Decimal::ZERO;

        while !remaining.is_zero() {
            let Some(lot) = queue.pop_oldest() else {
                break;
            };

            let closed = remaining.min(lot.quantity);
            realized += lot_pnl(closing, &lot, closing_price, closed) - trade_fee;
            remaining = remaining.saturating_sub(closed);

            if let Some(remainder) = lot.split_off(closed) {
                queue.reinsert_remainder(remainder);
            }
        }

        (remaining, realized)
    }

    /// Total open quantity on one side of an instrument
    pub fn open_quantity(&self, instrument: &Instrument, side: PositionSide) -> Quantity {
        self.books
            .get(instrument)
            .map(|book| book.queue(side).total_quantity())
            .unwrap_or_else(Quantity::zero)
    }

    /// Number of open lots on one side of an instrument
    pub fn lot_count(&self, instrument: &Instrument, side: PositionSide) -> usize {
        self.books
            .get(instrument)
            .map(|book| book.queue(side).lot_count())
            .unwrap_or(0)
    }

    /// Check whether an instrument has no open exposure on either side
    pub fn is_flat(&self, instrument: &Instrument) -> bool {
        self.books
            .get(instrument)
            .map(|book| book.long.is_empty() && book.short.is_empty())
            .unwrap_or(true)
    }
}

/// Realized PnL of closing `closed` units of `lot` at `closing_price`
///
/// `lot_side` is the side of the lot being closed: a long lot profits when
/// the exit exceeds its entry, a short lot profits when the exit is below.
fn lot_pnl(lot_side: PositionSide, lot: &Lot, closing_price: Price, closed: Quantity) -> Decimal {
    let entry = lot.average_price.as_decimal();
    let exit = closing_price.as_decimal();
    let spread = match lot_side {
        PositionSide::LONG => exit - entry,
        PositionSide::SHORT => entry - exit,
    };
    spread * closed.as_decimal()
}
