//! Table inventory storage.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::table::{Chairs, Table, TableId};

use super::connection::Database;

const LIST_TABLES: &str = "SELECT id, chairs FROM dining_tables ORDER BY id";

const SELECT_TABLE: &str = "SELECT id, chairs FROM dining_tables WHERE id = ?";

const INSERT_TABLE: &str = "INSERT INTO dining_tables (chairs) VALUES (?)";

const DELETE_TABLE: &str = "DELETE FROM dining_tables WHERE id = ?";

fn row_to_table(row: &rusqlite::Row<'_>) -> rusqlite::Result<Table> {
    let id: u32 = row.get(0)?;
    let chairs: u32 = row.get(1)?;
    let chairs = Chairs::try_from(chairs).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Integer, Box::new(e))
    })?;
    Ok(Table::new(TableId::new(id), chairs))
}

impl Database {
    /// Lists the whole table inventory, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
        let mut stmt = conn.prepare_cached(LIST_TABLES)?;
        let tables = stmt
            .query_map([], row_to_table)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tables)
    }

    /// Looks up a single table.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_table(conn: &Connection, id: TableId) -> Result<Option<Table>> {
        Ok(conn
            .query_row(SELECT_TABLE, [id.value()], row_to_table)
            .optional()?)
    }

    /// Inserts a table and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_table(conn: &Connection, chairs: Chairs) -> Result<Table> {
        conn.execute(INSERT_TABLE, params![chairs.value()])?;
        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, conn.last_insert_rowid()))?;
        Ok(Table::new(TableId::new(id), chairs))
    }

    /// Deletes a table. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_table(conn: &Connection, id: TableId) -> Result<bool> {
        Ok(conn.execute(DELETE_TABLE, [id.value()])? > 0)
    }
}
