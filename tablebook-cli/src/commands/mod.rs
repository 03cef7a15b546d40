//! CLI command implementations.
//!
//! - `init`: Create the data directory, database and optional config
//! - `table`: Add, remove and list dining tables
//! - `book`: Book tables for a party
//! - `days`: Show booked dates with remaining capacity
//! - `preview`: Show booked dates that cannot take a party
//! - `reservations`: List, show and delete stored reservations

pub mod book;
pub mod days;
pub mod init;
pub mod preview;
pub mod reservations;
pub mod table;

pub use book::BookCommand;
pub use days::DaysCommand;
pub use init::InitCommand;
pub use preview::PreviewCommand;
pub use reservations::ReservationsCommand;
pub use table::TableCommand;
