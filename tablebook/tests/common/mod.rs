//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use tablebook::{
    BookingRequest, Chairs, Contact, Database, DatabaseConfig, InventoryOperations, Table,
};
use tempfile::TempDir;

/// A database file inside a temporary directory.
///
/// The directory is removed when the fixture is dropped, so keep it alive
/// for as long as any connection to it is open.
pub struct TestDatabase {
    _dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tablebook.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();
        Self { _dir: dir, path }
    }

    /// Creates a database stocked with tables of the given sizes, in order.
    pub fn with_tables(sizes: &[u32]) -> (Self, Vec<Table>) {
        let fixture = Self::new();
        let mut db = fixture.open();
        let tables = sizes
            .iter()
            .map(|&n| InventoryOperations::add_table(&mut db, Chairs::try_from(n).unwrap()).unwrap())
            .collect();
        (fixture, tables)
    }

    /// Opens a new connection to the database.
    pub fn open(&self) -> Database {
        Database::open(DatabaseConfig::new(&self.path)).unwrap()
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses a `YYYY-MM-DD` date.
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Builds a valid request for `guests` on `day` at 19:00.
#[allow(dead_code)]
pub fn request(day: &str, guests: u32) -> BookingRequest {
    BookingRequest::new(
        date(day),
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        guests,
        Contact::new(format!("Guest of {guests}"), "555-0100"),
    )
}
