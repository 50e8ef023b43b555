//! Types library for the FIFO realized-PnL toolchain
//!
//! This library provides the core type definitions shared by the matching
//! engine and the report tooling, ensuring type safety and deterministic
//! behavior across the batch computation.
//!
//! # Modules
//! - `ids`: Opaque identifiers (OrderRef, Instrument)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `trade`: Trade execution records, raw and validated
//! - `lot`: Open position slices awaiting an offsetting close
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod lot;
pub mod numeric;
pub mod trade;

// Library version constant
pub const LIB_VERSION: &str = "0.1.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::lot::*;
    pub use crate::numeric::*;
    pub use crate::trade::*;
}
