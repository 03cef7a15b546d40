#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for allocating restaurant tables to reservations.
//!
//! Bookings take whole tables, smallest first, from the tables still free
//! on the requested date. Each booking is one storage transaction holding
//! the database write lock, so concurrent bookings for the same date never
//! share a table and a failed booking leaves nothing behind.
//!
//! ## Core Types
//!
//! - [`Table`], [`TableId`] and [`Chairs`]: the dining room inventory
//! - [`BookingRequest`] and [`Booking`]: input and outcome of a booking
//! - [`DailyAllocation`]: per-date accounting of chairs and tables
//! - [`ReservationAllocator`]: booking and availability queries
//! - [`ReservationView`]: audience-specific projections of stored bookings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tablebook::allocation::pack_smallest_first;
//! use tablebook::{Chairs, Table, TableId};
//!
//! let tables = [
//!     Table::new(TableId::new(1), Chairs::try_from(2).unwrap()),
//!     Table::new(TableId::new(2), Chairs::try_from(4).unwrap()),
//!     Table::new(TableId::new(3), Chairs::try_from(6).unwrap()),
//! ];
//!
//! let picked = pack_smallest_first(&tables, 5).unwrap();
//! assert_eq!(picked.len(), 2);
//! assert_eq!(picked[0].id, TableId::new(1));
//! ```

pub mod allocation;
pub mod allocator;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod table;

// Re-export key types at crate root for convenience
pub use allocator::{BookingPolicy, PreviewPolicy, ReservationAllocator};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, FailureKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{InventoryOperations, ReservationOperations};
pub use reservation::{
    AdminReservationView, Audience, Booking, BookingRequest, Contact, DailyAllocation,
    DayAvailability, DayStatus, PublicReservationView, ReservationDetail, ReservationId,
    ReservationView, UnavailableDay,
};
pub use table::{Chairs, Table, TableId, MAX_CHAIRS_PER_TABLE};
