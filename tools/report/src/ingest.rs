//! Trade ingestion from the filled-order CSV export
//!
//! Converts raw rows into `TradeRecord`s at a single fallible boundary:
//! every numeric field is parsed explicitly and a malformed value is a
//! field-named error, never a NaN that leaks into the computation.
//! Timestamps may arrive either as `YYYY-MM-DD HH:mm:ss` text or as Excel
//! serial-date numbers; both normalize to second-precision UTC.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use pnl_types::errors::RecordError;
use pnl_types::ids::{Instrument, OrderRef};
use pnl_types::numeric::{Price, Quantity};
use pnl_types::trade::TradeRecord;

/// Days between the Excel serial-date epoch (1899-12-30) and 1970-01-01
const EXCEL_UNIX_EPOCH_OFFSET_DAYS: f64 = 25_569.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Ingestion errors
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read export: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Record {
        /// 1-based data row number (header excluded)
        row: u64,
        #[source]
        source: RecordError,
    },
}

/// One raw row of the filled-order export, column names verbatim
#[derive(Debug, Clone, Deserialize)]
struct TradeRow {
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Filled Time")]
    filled_time: String,
    #[serde(rename = "Instrument")]
    instrument: String,
    #[serde(rename = "Side")]
    side: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Executed")]
    executed: String,
    #[serde(rename = "Average Price")]
    average_price: String,
    #[serde(rename = "Total Fee")]
    total_fee: String,
    #[serde(rename = "Fee Token")]
    fee_token: String,
    #[serde(rename = "Status")]
    status: String,
}

/// Parse an export timestamp into second-precision UTC
///
/// Accepts `YYYY-MM-DD HH:mm:ss` text, RFC 3339, or an Excel serial-date
/// number (fractional days since 1899-12-30).
pub fn parse_export_datetime(field: &'static str, raw: &str) -> Result<DateTime<Utc>, RecordError> {
    let trimmed = raw.trim();

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(serial) = trimmed.parse::<f64>() {
        let unix_seconds = ((serial - EXCEL_UNIX_EPOCH_OFFSET_DAYS) * SECONDS_PER_DAY).round() as i64;
        if let Some(datetime) = DateTime::from_timestamp(unix_seconds, 0) {
            return Ok(datetime);
        }
    }

    Err(RecordError::timestamp(field, raw))
}

fn record_from_row(row: TradeRow) -> Result<TradeRecord, RecordError> {
    Ok(TradeRecord {
        order_id: OrderRef::new(row.order_id),
        filled_time: parse_export_datetime("Filled Time", &row.filled_time)?,
        instrument: Instrument::new(row.instrument),
        side: row.side,
        price: Price::from_str(&row.price).map_err(|e| RecordError::numeric("Price", e))?,
        quantity: Quantity::from_str(&row.quantity)
            .map_err(|e| RecordError::numeric("Quantity", e))?,
        executed_quantity: Quantity::from_str(&row.executed)
            .map_err(|e| RecordError::numeric("Executed", e))?,
        average_price: Price::from_str(&row.average_price)
            .map_err(|e| RecordError::numeric("Average Price", e))?,
        total_fee: row
            .total_fee
            .trim()
            .parse()
            .map_err(|_| {
                RecordError::numeric(
                    "Total Fee",
                    pnl_types::errors::NumericError::InvalidDecimal {
                        value: row.total_fee.clone(),
                    },
                )
            })?,
        fee_token: row.fee_token,
        status: row.status,
    })
}

/// Read trade records from a CSV reader
///
/// Row order is preserved; the chronological sequencer relies on it for
/// stable tie-breaking.
pub fn read_trades<R: Read>(reader: R) -> Result<Vec<TradeRecord>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<TradeRow>().enumerate() {
        let row = result?;
        let record = record_from_row(row).map_err(|source| IngestError::Record {
            row: index as u64 + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Read trade records from a CSV file path
pub fn read_trades_path(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>, IngestError> {
    let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_trades(file)
}

/// Keep only records whose instrument symbol starts with `prefix`
pub fn filter_by_instrument_prefix(records: Vec<TradeRecord>, prefix: &str) -> Vec<TradeRecord> {
    records
        .into_iter()
        .filter(|record| record.instrument.as_str().starts_with(prefix))
        .collect()
}
