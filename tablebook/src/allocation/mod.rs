//! Table allocation algorithms.
//!
//! These functions are pure: they work on table lists already loaded from
//! storage and never touch the database. [`crate::ReservationAllocator`]
//! runs them inside a write transaction.

mod packing;
mod preview;

#[cfg(test)]
mod proptests;

pub use packing::{free_tables, pack_smallest_first};
pub use preview::{coarse_fit, required_tables};
