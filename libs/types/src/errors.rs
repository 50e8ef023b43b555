//! Error types for the realized-PnL toolchain
//!
//! Error taxonomy using thiserror. Malformed numeric or timestamp fields
//! are distinct, field-named errors raised at the record construction
//! boundary; an unrecognized trade side is not an error here but a
//! non-fatal skip handled by the engine's validator.

use thiserror::Error;

/// Numeric parsing and range errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("invalid decimal: {value}")]
    InvalidDecimal { value: String },

    #[error("negative quantity: {value}")]
    NegativeQuantity { value: String },
}

/// Errors raised while constructing a trade record from raw row data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("invalid value for {field}: {source}")]
    Numeric {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid timestamp for {field}: {value}")]
    Timestamp { field: &'static str, value: String },
}

impl RecordError {
    /// Attach a field name to a numeric parse failure
    pub fn numeric(field: &'static str, source: NumericError) -> Self {
        Self::Numeric { field, source }
    }

    pub fn timestamp(field: &'static str, value: impl Into<String>) -> Self {
        Self::Timestamp {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_error_display() {
        let err = NumericError::InvalidDecimal {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid decimal: abc");
    }

    #[test]
    fn test_record_error_names_field() {
        let err = RecordError::numeric(
            "Average Price",
            NumericError::InvalidDecimal {
                value: "?".to_string(),
            },
        );
        assert!(err.to_string().contains("Average Price"));
    }

    #[test]
    fn test_timestamp_error_display() {
        let err = RecordError::timestamp("Filled Time", "yesterday");
        assert_eq!(err.to_string(), "invalid timestamp for Filled Time: yesterday");
    }
}
