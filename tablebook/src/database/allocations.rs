//! Per-date aggregate allocation storage.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::reservation::DailyAllocation;
use crate::table::TableId;

use super::connection::Database;
use super::convert::{date_from_sql, date_to_sql, now_unix_secs};

const SELECT_ALLOCATION: &str = r"
    SELECT remaining_chairs
    FROM daily_allocations
    WHERE date = ?
";

const SELECT_ALLOCATED_TABLES: &str = r"
    SELECT table_id
    FROM allocated_tables
    WHERE date = ?
    ORDER BY table_id
";

const LIST_ALLOCATIONS: &str = r"
    SELECT date, remaining_chairs
    FROM daily_allocations
    ORDER BY date
";

const LIST_ALL_ALLOCATED_TABLES: &str = r"
    SELECT date, table_id
    FROM allocated_tables
";

const UPSERT_ALLOCATION: &str = r"
    INSERT INTO daily_allocations (date, remaining_chairs, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?3)
    ON CONFLICT(date) DO UPDATE SET
        remaining_chairs = excluded.remaining_chairs,
        updated_at = excluded.updated_at
";

const INSERT_ALLOCATED_TABLE: &str = r"
    INSERT INTO allocated_tables (date, table_id)
    VALUES (?, ?)
";

const ADJUST_REMAINING: &str = r"
    UPDATE daily_allocations
    SET remaining_chairs = remaining_chairs + ?, updated_at = ?
";

const SELECT_DATES_WITH_TABLE: &str = r"
    SELECT date
    FROM allocated_tables
    WHERE table_id = ?
    ORDER BY date
";

impl Database {
    /// Loads the aggregate record for `date`, if the date has any booking.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn load_daily_allocation(
        conn: &Connection,
        date: NaiveDate,
    ) -> Result<Option<DailyAllocation>> {
        let key = date_to_sql(date);
        let Some(remaining_chairs) = conn
            .query_row(SELECT_ALLOCATION, [&key], |row| row.get::<_, u32>(0))
            .optional()?
        else {
            return Ok(None);
        };

        let mut stmt = conn.prepare_cached(SELECT_ALLOCATED_TABLES)?;
        let allocated_tables = stmt
            .query_map([&key], |row| row.get::<_, u32>(0).map(TableId::new))?
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;

        Ok(Some(DailyAllocation {
            date,
            remaining_chairs,
            allocated_tables,
        }))
    }

    /// Lists every aggregate record, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored date is malformed.
    pub fn list_daily_allocations(conn: &Connection) -> Result<Vec<DailyAllocation>> {
        let mut tables_by_date: BTreeMap<String, BTreeSet<TableId>> = BTreeMap::new();
        {
            let mut stmt = conn.prepare_cached(LIST_ALL_ALLOCATED_TABLES)?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, TableId::new(row.get(1)?)))
            })?;
            for row in rows {
                let (date, table) = row?;
                tables_by_date.entry(date).or_default().insert(table);
            }
        }

        let mut stmt = conn.prepare_cached(LIST_ALLOCATIONS)?;
        let rows = stmt.query_map([], |row| {
            let raw: String = row.get(0)?;
            Ok((date_from_sql(0, &raw)?, raw, row.get::<_, u32>(1)?))
        })?;

        let mut allocations = Vec::new();
        for row in rows {
            let (date, raw, remaining_chairs) = row?;
            allocations.push(DailyAllocation {
                date,
                remaining_chairs,
                allocated_tables: tables_by_date.remove(&raw).unwrap_or_default(),
            });
        }
        Ok(allocations)
    }

    /// Writes the aggregate row for `date` and appends `new_tables` to its
    /// allocated set.
    ///
    /// Must run inside a write transaction. Assigning a table that is
    /// already allocated on `date` violates the primary key and fails.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn save_daily_allocation(
        conn: &Connection,
        date: NaiveDate,
        remaining_chairs: u32,
        new_tables: &[TableId],
    ) -> Result<()> {
        let key = date_to_sql(date);
        conn.execute(
            UPSERT_ALLOCATION,
            params![key, remaining_chairs, now_unix_secs()],
        )?;

        let mut stmt = conn.prepare_cached(INSERT_ALLOCATED_TABLE)?;
        for table in new_tables {
            stmt.execute(params![key, table.value()])?;
        }
        Ok(())
    }

    /// Adds `delta` chairs to the remaining count of every booked date.
    ///
    /// Used when the inventory grows or shrinks. Returns the number of
    /// dates touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails, including when a count would
    /// drop below zero.
    pub fn adjust_remaining_chairs(conn: &Connection, delta: i64) -> Result<usize> {
        Ok(conn.execute(ADJUST_REMAINING, params![delta, now_unix_secs()])?)
    }

    /// Returns the dates on which `table` is allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored date is malformed.
    pub fn dates_with_table(conn: &Connection, table: TableId) -> Result<Vec<NaiveDate>> {
        let mut stmt = conn.prepare_cached(SELECT_DATES_WITH_TABLE)?;
        let dates = stmt
            .query_map([table.value()], |row| {
                let raw: String = row.get(0)?;
                date_from_sql(0, &raw)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(dates)
    }
}
