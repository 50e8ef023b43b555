//! Position book infrastructure module
//!
//! Contains the per-side FIFO lot queue and the per-instrument position
//! book built on top of it.

pub mod lot_queue;
pub mod position_book;

pub use lot_queue::LotQueue;
pub use position_book::PositionBook;
