//! Report tooling around the PnL engine
//!
//! Reads trade rows from a filled-order CSV export (normalizing Excel
//! serial-date timestamps to UTC), hands them to the matching engine, and
//! writes flat report rows to a CSV sink. Also houses the group-by-day
//! aggregation utilities for funding-fee and interest rows, which involve
//! no matching logic.

pub mod aggregate;
pub mod emit;
pub mod ingest;
