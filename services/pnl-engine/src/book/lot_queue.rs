//! FIFO queue of open lots for one side of an instrument
//!
//! Lots are maintained in arrival order to enforce first-in first-out
//! matching. New lots append to the tail; closes pop from the head; the
//! remainder of a partially closed lot is reinserted at the head so it
//! keeps its matching priority over lots that arrived later.
//!
//! Head pops and head pushes are O(1) amortized (VecDeque).

use std::collections::VecDeque;

use pnl_types::lot::Lot;
use pnl_types::numeric::Quantity;

/// One side's queue of open lots (oldest first)
#[derive(Debug, Clone, Default)]
pub struct LotQueue {
    lots: VecDeque<Lot>,
    /// Total open quantity across all lots in the queue
    total_quantity: Quantity,
}

impl LotQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            lots: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Append a newly opened lot at the tail (lowest matching priority)
    pub fn open(&mut self, lot: Lot) {
        self.total_quantity = self.total_quantity + lot.quantity;
        self.lots.push_back(lot);
    }

    /// Pop the oldest lot from the head
    pub fn pop_oldest(&mut self) -> Option<Lot> {
        let lot = self.lots.pop_front()?;
        self.total_quantity = self.total_quantity.saturating_sub(lot.quantity);
        Some(lot)
    }

    /// Reinsert the unmatched remainder of a partially closed lot at the
    /// head, ahead of every lot that arrived after the original
    pub fn reinsert_remainder(&mut self, lot: Lot) {
        self.total_quantity = self.total_quantity + lot.quantity;
        self.lots.push_front(lot);
    }

    /// Peek at the oldest lot without removing it
    pub fn peek_oldest(&self) -> Option<&Lot> {
        self.lots.front()
    }

    /// Check if the queue holds no open lots
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Total open quantity across the queue
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of open lots
    pub fn lot_count(&self) -> usize {
        self.lots.len()
    }
}
