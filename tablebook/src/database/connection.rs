//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for `SQLite`.

use std::time::Duration;

use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// One `Database` wraps one `SQLite` connection. Callers that book
/// concurrently open one `Database` per thread or process; the write lock
/// taken by [`Database::begin_immediate`] serializes them.
///
/// # Examples
///
/// ```no_run
/// use tablebook::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/tablebook.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the parent directory
    /// cannot be created, a PRAGMA fails, or the schema is incompatible.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // busy_timeout first: switching to WAL needs a lock of its own
        conn.busy_timeout(config.busy_timeout)?;
        if !config.read_only {
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
            super::migrations::check_schema_compatibility(&conn)?;
        }

        log::debug!("opened database {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Starts a transaction holding the database write lock.
    ///
    /// The lock is acquired before the first read, so every read inside the
    /// transaction observes all previously committed bookings and no other
    /// writer can commit until this transaction ends. Dropping the returned
    /// transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the lock is still held by another
    /// connection after the configured busy timeout.
    pub fn begin_immediate(&mut self) -> Result<Transaction<'_>> {
        let busy_timeout = self.config.busy_timeout;
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| Error::from_locked(e, busy_timeout))
    }

    /// Starts a deferred transaction for reads that must see one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    pub fn read_snapshot(&self) -> Result<Transaction<'_>> {
        Ok(self.conn.unchecked_transaction()?)
    }

    /// Returns the configured busy timeout.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        self.config.busy_timeout
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
