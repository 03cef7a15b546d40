//! Shared test utilities for database unit tests.

use chrono::{NaiveDate, NaiveTime};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::table::{Chairs, Table};
use crate::{BookingRequest, Contact};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test database stocked with tables of the given sizes, in order.
///
/// # Panics
///
/// Panics if any size is zero or the inserts fail.
#[must_use]
pub fn create_test_database_with_tables(sizes: &[u32]) -> (Database, Vec<Table>) {
    let db = create_test_database();
    let tables = sizes
        .iter()
        .map(|&n| Database::insert_table(db.connection(), Chairs::try_from(n).unwrap()).unwrap())
        .collect();
    (db, tables)
}

/// Creates a booking request from `YYYY-MM-DD` and `HH:MM` strings.
///
/// # Panics
///
/// Panics if the date or time cannot be parsed.
#[must_use]
pub fn create_test_request(date: &str, time: &str, guests: u32) -> BookingRequest {
    BookingRequest::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        guests,
        Contact::new("Test Guest", "555-0100"),
    )
}
