//! Administrative operations around the booking core.
//!
//! Inventory changes keep every existing per-date record consistent with
//! the new total capacity, inside the same write transaction as the
//! inventory change itself. Reservation lookups always go through an
//! [`Audience`](crate::Audience) projection.

pub mod init;
pub mod inventory;
pub mod reservations;

pub use init::{init_database, InitOptions, InitResult};
pub use inventory::InventoryOperations;
pub use reservations::ReservationOperations;
