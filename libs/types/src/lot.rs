//! Open position slices awaiting an offsetting close
//!
//! A lot is created when a trade opens exposure and destroyed when fully
//! closed. Lots are never mutated in place: a partial close produces a new
//! lot carrying the remainder, which keeps the queue semantics explicit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::numeric::{Price, Quantity};
use crate::trade::Side;

/// Which side of the book a lot (or the exposure a trade opens) sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    /// Long exposure - profit when price increases
    LONG,
    /// Short exposure - profit when price decreases
    SHORT,
}

impl PositionSide {
    /// Get the opposite side of the book
    pub fn opposite(&self) -> Self {
        match self {
            PositionSide::LONG => PositionSide::SHORT,
            PositionSide::SHORT => PositionSide::LONG,
        }
    }

    /// The side of the book a trade of the given direction opens
    pub fn opened_by(side: Side) -> Self {
        match side {
            Side::BUY => PositionSide::LONG,
            Side::SELL => PositionSide::SHORT,
        }
    }
}

/// An open, unmatched slice of a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Remaining open quantity, strictly positive
    pub quantity: Quantity,
    /// Average price the slice was opened at
    pub average_price: Price,
    /// Fee attributed to this lot at creation time
    pub fee: Decimal,
}

impl Lot {
    /// Create a new open lot
    pub fn new(quantity: Quantity, average_price: Price, fee: Decimal) -> Self {
        debug_assert!(!quantity.is_zero(), "lot quantity must be positive");
        Self {
            quantity,
            average_price,
            fee,
        }
    }

    /// Close `closed` units against this lot
    ///
    /// Returns the remainder as a new lot with the same average price and
    /// fee, or None when the lot is fully consumed. `closed` must not
    /// exceed the lot quantity.
    pub fn split_off(&self, closed: Quantity) -> Option<Lot> {
        debug_assert!(closed <= self.quantity, "cannot close more than the lot holds");
        let remainder = self.quantity.saturating_sub(closed);
        if remainder.is_zero() {
            None
        } else {
            Some(Lot {
                quantity: remainder,
                average_price: self.average_price,
                fee: self.fee,
            })
        }
    }
}
