//! Realized-PnL ledger
//!
//! Accumulates per-trade PnL keyed by exact (second-precision) execution
//! timestamp and maintains a running total. Uses BTreeMap so iteration
//! order is deterministic and chronological.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::events::TradeSkippedEvent;

/// Accumulator for realized PnL during one batch run
#[derive(Debug, Clone, Default)]
pub struct PnlLedger {
    by_time: BTreeMap<DateTime<Utc>, Decimal>,
    total: Decimal,
}

impl PnlLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trade's realized PnL under its execution timestamp
    ///
    /// An entry is created on first contribution, including zero-valued
    /// ones; zeros are only dropped at finalize.
    pub fn record(&mut self, executed_at: DateTime<Utc>, pnl: Decimal) {
        self.total += pnl;
        *self.by_time.entry(executed_at).or_insert(Decimal::ZERO) += pnl;
    }

    /// Running total across all recorded trades
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of all per-timestamp entries before any filtering
    pub fn unfiltered_sum(&self) -> Decimal {
        self.by_time.values().copied().sum()
    }

    /// Finalize the run: drop timestamp entries that sum to exactly zero
    ///
    /// A pure open, or closes that offset perfectly at one timestamp,
    /// leave no visible ledger line. The running total is not filtered.
    pub fn finalize(self, skipped: Vec<TradeSkippedEvent>) -> PnlReport {
        let total = self.total;
        let realized_by_time = self
            .by_time
            .into_iter()
            .filter(|(_, pnl)| !pnl.is_zero())
            .collect();

        PnlReport {
            realized_by_time,
            total,
            skipped,
        }
    }
}

/// Result of one batch computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlReport {
    /// Realized PnL per execution timestamp, zero-valued entries omitted
    pub realized_by_time: BTreeMap<DateTime<Utc>, Decimal>,
    /// Total realized PnL across all trades, unfiltered
    pub total: Decimal,
    /// Records dropped by the validator
    pub skipped: Vec<TradeSkippedEvent>,
}
