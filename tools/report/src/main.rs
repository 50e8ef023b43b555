//! Realized-PnL report command line
//!
//! `trades` runs the FIFO matching engine over a filled-order export and
//! writes per-timestamp realized-gain rows. `funding` aggregates
//! funding-fee and loan-interest exports into per-day rows.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pnl_report::aggregate;
use pnl_report::emit;
use pnl_report::ingest;

#[derive(Parser)]
#[command(name = "pnl-report", version, about = "Realized PnL reporting from trade exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute realized PnL from a filled-order CSV export
    Trades {
        /// Path to the filled-order export
        input: PathBuf,

        /// Path for the report CSV
        #[arg(short, long)]
        output: PathBuf,

        /// Keep only instruments whose symbol starts with this prefix
        #[arg(long, default_value = "PERP")]
        instrument_prefix: String,

        /// Currency written on every report row
        #[arg(long, default_value = "USDT")]
        currency: String,
    },

    /// Aggregate funding-fee and loan-interest exports per day
    Funding {
        /// Path to the funding-fee export
        #[arg(long)]
        funding: Option<PathBuf>,

        /// Path to the margin-interest export
        #[arg(long)]
        interest: Option<PathBuf>,

        /// Path for the report CSV
        #[arg(short, long)]
        output: PathBuf,

        /// Currency written on every report row
        #[arg(long, default_value = "USDT")]
        currency: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trades {
            input,
            output,
            instrument_prefix,
            currency,
        } => {
            let records = ingest::read_trades_path(&input)
                .with_context(|| format!("reading trades from {}", input.display()))?;
            let records = ingest::filter_by_instrument_prefix(records, &instrument_prefix);
            info!(count = records.len(), prefix = %instrument_prefix, "loaded trade records");

            let report = pnl_engine::compute(records);
            for skipped in &report.skipped {
                info!(order_id = %skipped.order_id, side = %skipped.side, "trade was skipped");
            }

            let rows = emit::ledger_rows(&report, &currency);
            emit::write_rows_path(&output, &rows)
                .with_context(|| format!("writing report to {}", output.display()))?;

            println!("total realized PnL: {} {currency}", report.total);
        }

        Commands::Funding {
            funding,
            interest,
            output,
            currency,
        } => {
            let mut rows = Vec::new();

            if let Some(path) = funding {
                let by_day = aggregate::aggregate_funding_path(&path)
                    .with_context(|| format!("reading funding fees from {}", path.display()))?;
                info!(days = by_day.len(), "aggregated funding fees");
                rows.extend(aggregate::daily_rows(
                    &by_day,
                    &currency,
                    emit::LABEL_REALIZED_GAIN,
                ));
            }

            if let Some(path) = interest {
                let by_day = aggregate::aggregate_interest_path(&path)
                    .with_context(|| format!("reading loan interest from {}", path.display()))?;
                info!(days = by_day.len(), "aggregated loan interest");
                rows.extend(aggregate::daily_rows(
                    &by_day,
                    &currency,
                    emit::LABEL_LOAN_INTEREST,
                ));
            }

            emit::write_rows_path(&output, &rows)
                .with_context(|| format!("writing report to {}", output.display()))?;

            println!("wrote {} daily rows", rows.len());
        }
    }

    Ok(())
}
