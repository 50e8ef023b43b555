//! Flat report-row emission
//!
//! The engine's ledger is mapped to flat `Koinly Date / Amount / Currency
//! / Label` rows here; the core never formats currencies or labels.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use pnl_engine::PnlReport;

/// Label attached to realized trading gains
pub const LABEL_REALIZED_GAIN: &str = "realized gain";
/// Label attached to aggregated loan interest
pub const LABEL_LOAN_INTEREST: &str = "loan interest";

/// One output row of the report CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Koinly Date")]
    pub date: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Label")]
    pub label: String,
}

/// Map a finalized PnL report to output rows, chronological order
pub fn ledger_rows(report: &PnlReport, currency: &str) -> Vec<ReportRow> {
    report
        .realized_by_time
        .iter()
        .map(|(timestamp, pnl)| ReportRow {
            date: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            amount: *pnl,
            currency: currency.to_string(),
            label: LABEL_REALIZED_GAIN.to_string(),
        })
        .collect()
}

/// Write report rows to a CSV writer
///
/// The header row is always written, even when there are no data rows.
pub fn write_rows<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["Koinly Date", "Amount", "Currency", "Label"])?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write report rows to a CSV file path
pub fn write_rows_path(path: impl AsRef<Path>, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let file = File::create(path.as_ref())?;
    write_rows(file, rows)
}
