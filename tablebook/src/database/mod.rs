//! Database layer for persistent storage of tables and reservations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, and row-level operations for the table
//! inventory, per-date allocations and reservation details.
//!
//! Row-level operations are associated functions taking a `&Connection`
//! so they compose inside a single transaction opened with
//! [`Database::begin_immediate`].
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::Chairs;
//!
//! let config = DatabaseConfig::new("/tmp/tablebook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let tx = db.begin_immediate().unwrap();
//! Database::insert_table(&tx, Chairs::try_from(4).unwrap()).unwrap();
//! tx.commit().unwrap();
//!
//! for table in Database::list_tables(db.connection()).unwrap() {
//!     println!("{} seats {}", table.id, table.chairs);
//! }
//! ```

mod allocations;
mod config;
mod connection;
mod convert;
mod details;
pub mod migrations;
mod schema;
mod tables;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
