//! Daily aggregation of funding-fee and loan-interest rows
//!
//! These exports carry many small rows per day; the report sums them per
//! calendar day (UTC) and emits one row per day. No matching logic is
//! involved, only grouping.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use pnl_types::errors::{NumericError, RecordError};

use crate::emit::ReportRow;
use crate::ingest::{parse_export_datetime, IngestError};

/// One raw row of the funding-fee export
#[derive(Debug, Clone, Deserialize)]
struct FundingRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Funding Fee Amount")]
    amount: String,
}

/// One raw row of the margin-account interest export
#[derive(Debug, Clone, Deserialize)]
struct InterestRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Quantity")]
    quantity: String,
}

fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, RecordError> {
    raw.trim().parse().map_err(|_| {
        RecordError::numeric(
            field,
            NumericError::InvalidDecimal {
                value: raw.to_string(),
            },
        )
    })
}

/// Sum funding-fee amounts per UTC calendar day
pub fn aggregate_funding<R: Read>(reader: R) -> Result<BTreeMap<NaiveDate, Decimal>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_day = BTreeMap::new();

    for (index, result) in csv_reader.deserialize::<FundingRow>().enumerate() {
        let row = result?;
        let day = parse_export_datetime("Time", &row.time)
            .and_then(|ts| {
                parse_amount("Funding Fee Amount", &row.amount).map(|amount| (ts, amount))
            })
            .map_err(|source| IngestError::Record {
                row: index as u64 + 1,
                source,
            })?;

        *by_day.entry(day.0.date_naive()).or_insert(Decimal::ZERO) += day.1;
    }

    Ok(by_day)
}

/// Sum loan-interest quantities per UTC calendar day
///
/// Only rows with `Action` exactly `LOAN` count; quantities may carry a
/// trailing ` USDT` unit suffix which is stripped before parsing.
pub fn aggregate_interest<R: Read>(reader: R) -> Result<BTreeMap<NaiveDate, Decimal>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_day = BTreeMap::new();

    for (index, result) in csv_reader.deserialize::<InterestRow>().enumerate() {
        let row = result?;
        if row.action != "LOAN" {
            continue;
        }

        let trimmed = row.quantity.trim();
        let bare = trimmed.strip_suffix(" USDT").unwrap_or(trimmed);
        let entry = parse_export_datetime("Time", &row.time)
            .and_then(|ts| parse_amount("Quantity", bare).map(|amount| (ts, amount)))
            .map_err(|source| IngestError::Record {
                row: index as u64 + 1,
                source,
            })?;

        *by_day.entry(entry.0.date_naive()).or_insert(Decimal::ZERO) += entry.1;
    }

    Ok(by_day)
}

/// Convenience wrappers over file paths
pub fn aggregate_funding_path(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<NaiveDate, Decimal>, IngestError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    aggregate_funding(file)
}

pub fn aggregate_interest_path(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<NaiveDate, Decimal>, IngestError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    aggregate_interest(file)
}

/// Turn a per-day sum into report rows, one per day in date order
pub fn daily_rows(
    by_day: &BTreeMap<NaiveDate, Decimal>,
    currency: &str,
    label: &str,
) -> Vec<ReportRow> {
    by_day
        .iter()
        .map(|(day, amount)| ReportRow {
            date: day.format("%Y-%m-%d").to_string(),
            amount: *amount,
            currency: currency.to_string(),
            label: label.to_string(),
        })
        .collect()
}
