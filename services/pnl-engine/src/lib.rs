//! FIFO realized-PnL engine
//!
//! Reduces a chronological stream of trade executions into realized
//! profit-and-loss by matching opening and closing quantities first-in
//! first-out per instrument.
//!
//! **Key invariants:**
//! - FIFO strictly enforced: a close always consumes the oldest opposite
//!   lot first; a partially closed lot's remainder keeps its priority
//! - Deterministic: same validated, sorted input always produces the same
//!   ledger and total
//! - Conservation of quantity: opened minus closed equals what remains in
//!   the position queues
//! - Single pass, no rollback: the book and ledger evolve monotonically
//!   trade by trade

pub mod book;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod sequence;

pub use engine::{compute, PnlEngine};
pub use ledger::{PnlLedger, PnlReport};
