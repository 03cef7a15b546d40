//! Reservation lookups and administrative deletion.

use chrono::NaiveDate;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Audience, ReservationId, ReservationView};

/// Reads and deletes stored reservation details.
pub struct ReservationOperations;

impl ReservationOperations {
    /// Lists reservations, optionally for one date, ordered by date and time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations(
        db: &Database,
        date: Option<NaiveDate>,
        audience: Audience,
    ) -> Result<Vec<ReservationView>> {
        Ok(Database::list_reservation_details(db.connection(), date)?
            .iter()
            .map(|detail| detail.view(audience))
            .collect())
    }

    /// Looks up one reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has this id.
    pub fn get_reservation(
        db: &Database,
        id: ReservationId,
        audience: Audience,
    ) -> Result<ReservationView> {
        Database::get_reservation_detail(db.connection(), id)?
            .map(|detail| detail.view(audience))
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a reservation's detail record.
    ///
    /// The tables assigned at booking time stay allocated and the date's
    /// remaining chairs are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has this id, or a
    /// storage error if the delete fails.
    pub fn delete_reservation(db: &mut Database, id: ReservationId) -> Result<()> {
        let tx = db.begin_immediate()?;
        if !Database::delete_reservation_detail(&tx, id)? {
            return Err(not_found(id));
        }
        tx.commit()?;

        log::info!("deleted reservation {id}");
        Ok(())
    }
}

fn not_found(id: ReservationId) -> Error {
    Error::NotFound {
        resource: format!("reservation {id}"),
    }
}
