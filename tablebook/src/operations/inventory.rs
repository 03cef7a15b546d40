//! Table inventory management.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::table::{total_chairs, Chairs, Table, TableId};

/// Adds, removes and lists dining tables.
pub struct InventoryOperations;

impl InventoryOperations {
    /// Adds a table with `chairs` seats.
    ///
    /// The new chairs are credited to every date that already has a
    /// booking, so each date's remaining count stays equal to the total
    /// capacity minus its booked guests.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the inventory's total capacity would no
    ///   longer fit in a `u32`. Nothing is written.
    /// - A storage error if the lock cannot be acquired or a write fails.
    pub fn add_table(db: &mut Database, chairs: Chairs) -> Result<Table> {
        let tx = db.begin_immediate()?;
        let table = Database::insert_table(&tx, chairs)?;
        total_chairs(&Database::list_tables(&tx)?)?;
        let touched = Database::adjust_remaining_chairs(&tx, i64::from(chairs.value()))?;
        tx.commit()?;

        log::info!(
            "added table {} with {} chair(s), credited {touched} booked date(s)",
            table.id,
            table.chairs
        );
        Ok(table)
    }

    /// Removes a table that no booking holds.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the table does not exist.
    /// - [`Error::TableInUse`] if the table is allocated on any date.
    /// - A storage error if the lock cannot be acquired or a write fails.
    pub fn remove_table(db: &mut Database, id: TableId) -> Result<Table> {
        let tx = db.begin_immediate()?;

        let table = Database::get_table(&tx, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("table {id}"),
        })?;

        let dates = Database::dates_with_table(&tx, id)?;
        if !dates.is_empty() {
            return Err(Error::TableInUse { id, dates });
        }

        Database::delete_table(&tx, id)?;
        let touched =
            Database::adjust_remaining_chairs(&tx, -i64::from(table.chairs.value()))?;
        tx.commit()?;

        log::info!("removed table {id}, debited {touched} booked date(s)");
        Ok(table)
    }

    /// Lists every table, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tables(db: &Database) -> Result<Vec<Table>> {
        Database::list_tables(db.connection())
    }

    /// Sum of chairs across the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn total_capacity(db: &Database) -> Result<u32> {
        total_chairs(&Self::list_tables(db)?)
    }
}
