//! Database schema definitions and SQL constants.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key/value table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Table inventory. Capacity is fixed per table.
pub const CREATE_DINING_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS dining_tables (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        chairs INTEGER NOT NULL CHECK (chairs BETWEEN 1 AND 100)
    )";

/// One aggregate row per date that has at least one booking.
pub const CREATE_DAILY_ALLOCATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS daily_allocations (
        date TEXT PRIMARY KEY NOT NULL,
        remaining_chairs INTEGER NOT NULL CHECK (remaining_chairs >= 0),
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// The allocated-table set of each daily allocation.
///
/// The composite primary key rejects a second assignment of the same table
/// on the same date, whichever writer attempts it.
pub const CREATE_ALLOCATED_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS allocated_tables (
        date TEXT NOT NULL,
        table_id INTEGER NOT NULL,
        PRIMARY KEY (date, table_id)
    )";

/// Customer-facing booking records.
pub const CREATE_RESERVATION_DETAILS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservation_details (
        reservation_id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        guest_count INTEGER NOT NULL CHECK (guest_count BETWEEN 1 AND 10),
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        notes TEXT,
        created_at INTEGER NOT NULL
    )";

/// Speeds up per-date reservation listings.
pub const CREATE_DETAILS_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservation_details_date ON reservation_details(date)";

/// Speeds up the in-use check when removing a table.
pub const CREATE_ALLOCATED_TABLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_allocated_tables_table ON allocated_tables(table_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
