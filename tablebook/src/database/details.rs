//! Reservation detail storage.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::reservation::{Contact, ReservationDetail, ReservationId};

use super::connection::Database;
use super::convert::{
    date_from_sql, date_to_sql, time_from_sql, time_to_sql, unix_secs_to_datetime,
};

const INSERT_DETAIL: &str = r"
    INSERT INTO reservation_details
    (reservation_id, name, phone, email, guest_count, date, time, notes, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_DETAIL: &str = r"
    SELECT reservation_id, name, phone, email, guest_count, date, time, notes, created_at
    FROM reservation_details
    WHERE reservation_id = ?
";

const LIST_DETAILS: &str = r"
    SELECT reservation_id, name, phone, email, guest_count, date, time, notes, created_at
    FROM reservation_details
    ORDER BY date, time, created_at
";

const LIST_DETAILS_FOR_DATE: &str = r"
    SELECT reservation_id, name, phone, email, guest_count, date, time, notes, created_at
    FROM reservation_details
    WHERE date = ?
    ORDER BY time, created_at
";

const DELETE_DETAIL: &str = "DELETE FROM reservation_details WHERE reservation_id = ?";

/// Expects row fields in this order: `reservation_id`, name, phone, email,
/// `guest_count`, date, time, notes, `created_at`.
fn row_to_detail(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationDetail> {
    let id: String = row.get(0)?;
    let reservation_id: ReservationId = id.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let date: String = row.get(5)?;
    let time: String = row.get(6)?;

    let contact = Contact::new(row.get::<_, String>(1)?, row.get::<_, String>(2)?)
        .with_email(row.get(3)?)
        .with_notes(row.get(7)?);

    Ok(ReservationDetail {
        reservation_id,
        contact,
        guest_count: row.get(4)?,
        date: date_from_sql(5, &date)?,
        time: time_from_sql(6, &time)?,
        created_at: unix_secs_to_datetime(8, row.get(8)?)?,
    })
}

impl Database {
    /// Inserts a new reservation detail row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including on a duplicate id.
    pub fn insert_reservation_detail(conn: &Connection, detail: &ReservationDetail) -> Result<()> {
        conn.execute(
            INSERT_DETAIL,
            params![
                detail.reservation_id.to_string(),
                detail.contact.name,
                detail.contact.phone,
                detail.contact.email,
                detail.guest_count,
                date_to_sql(detail.date),
                time_to_sql(detail.time),
                detail.contact.notes,
                detail.created_at.timestamp(),
            ],
        )?;
        Ok(())
    }

    /// Retrieves a reservation detail by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation_detail(
        conn: &Connection,
        id: ReservationId,
    ) -> Result<Option<ReservationDetail>> {
        Ok(conn
            .query_row(SELECT_DETAIL, [id.to_string()], row_to_detail)
            .optional()?)
    }

    /// Lists reservation details, optionally restricted to one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservation_details(
        conn: &Connection,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ReservationDetail>> {
        let details = match date {
            Some(date) => {
                let mut stmt = conn.prepare_cached(LIST_DETAILS_FOR_DATE)?;
                let rows = stmt.query_map([date_to_sql(date)], row_to_detail)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare_cached(LIST_DETAILS)?;
                let rows = stmt.query_map([], row_to_detail)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(details)
    }

    /// Deletes a reservation detail row. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation_detail(conn: &Connection, id: ReservationId) -> Result<bool> {
        Ok(conn.execute(DELETE_DETAIL, [id.to_string()])? > 0)
    }
}
