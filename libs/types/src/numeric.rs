//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point
//! errors). Parsing is explicit and fallible: a malformed numeric field is
//! a reported error at the construction boundary, never a NaN that
//! propagates through the computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::errors::NumericError;

/// Execution or average price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price from a whole number
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a price from its decimal string representation
    pub fn from_str(value: &str) -> Result<Self, NumericError> {
        let decimal = value
            .trim()
            .parse::<Decimal>()
            .map_err(|_| NumericError::InvalidDecimal {
                value: value.to_string(),
            })?;
        Ok(Self(decimal))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative quantity of an instrument
///
/// Open lots always carry a strictly positive quantity; zero appears only
/// transiently (e.g. an execution with nothing filled).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Zero quantity
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a quantity, rejecting negative values
    pub fn try_new(value: Decimal) -> Result<Self, NumericError> {
        if value < Decimal::ZERO {
            return Err(NumericError::NegativeQuantity {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Parse a quantity from its decimal string representation
    pub fn from_str(value: &str) -> Result<Self, NumericError> {
        let decimal = value
            .trim()
            .parse::<Decimal>()
            .map_err(|_| NumericError::InvalidDecimal {
                value: value.to_string(),
            })?;
        Self::try_new(decimal)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Subtract, saturating at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self(Decimal::ZERO)
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
