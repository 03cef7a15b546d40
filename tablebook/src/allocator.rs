//! Transactional booking and availability queries.
//!
//! [`ReservationAllocator`] ties the pure packing and preview functions in
//! [`crate::allocation`] to storage. Every booking runs inside one
//! write-locked transaction: the per-date record is read, extended and
//! saved together with the reservation detail, or nothing is written.

use rusqlite::Connection;

use crate::allocation::{coarse_fit, free_tables, pack_smallest_first};
use crate::config::{Config, DEFAULT_MAX_GUESTS, DEFAULT_MIN_GUESTS, DEFAULT_PREVIEW_CHAIRS_PER_TABLE};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{
    Booking, BookingRequest, DailyAllocation, DayAvailability, DayStatus, ReservationDetail,
    ReservationId, UnavailableDay,
};
use crate::table::{total_chairs, Table, TableId};

/// Party size bounds enforced before a booking touches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Smallest accepted party.
    pub min_guests: u32,
    /// Largest accepted party.
    pub max_guests: u32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            min_guests: DEFAULT_MIN_GUESTS,
            max_guests: DEFAULT_MAX_GUESTS,
        }
    }
}

impl BookingPolicy {
    /// Checks a bare guest count against the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `guests` is out of bounds.
    pub fn check_guests(&self, guests: u32) -> Result<()> {
        if (self.min_guests..=self.max_guests).contains(&guests) {
            Ok(())
        } else {
            Err(Error::invalid(
                "guests",
                format!(
                    "must be between {} and {}, got {guests}",
                    self.min_guests, self.max_guests
                ),
            ))
        }
    }
}

/// Assumptions of the coarse availability preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPolicy {
    /// Chairs assumed at every table.
    pub chairs_per_table: u32,
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        Self {
            chairs_per_table: DEFAULT_PREVIEW_CHAIRS_PER_TABLE,
        }
    }
}

/// Books tables and answers availability questions.
///
/// The allocator holds no state besides its policies; all state lives in
/// the [`Database`] passed to each call.
///
/// # Examples
///
/// ```no_run
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::{BookingRequest, Contact, Database, DatabaseConfig, ReservationAllocator};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let allocator = ReservationAllocator::default();
///
/// let request = BookingRequest::new(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
///     4,
///     Contact::new("Ada", "555-0100"),
/// );
/// let booking = allocator.book(&mut db, &request).unwrap();
/// println!("{} -> {:?}", booking.reservation_id, booking.allocated_tables);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationAllocator {
    booking: BookingPolicy,
    preview: PreviewPolicy,
}

impl ReservationAllocator {
    /// Creates an allocator with explicit policies.
    #[must_use]
    pub const fn new(booking: BookingPolicy, preview: PreviewPolicy) -> Self {
        Self { booking, preview }
    }

    /// Creates an allocator from a merged configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            BookingPolicy {
                min_guests: config.min_guests(),
                max_guests: config.max_guests(),
            },
            PreviewPolicy {
                chairs_per_table: config.preview_chairs_per_table(),
            },
        )
    }

    /// Returns the booking policy.
    #[must_use]
    pub const fn booking_policy(&self) -> BookingPolicy {
        self.booking
    }

    /// Returns the preview policy.
    #[must_use]
    pub const fn preview_policy(&self) -> PreviewPolicy {
        self.preview
    }

    /// Books whole tables for `request`.
    ///
    /// Free tables on the requested date are taken smallest first until
    /// their chairs cover the party. The remaining chair count drops by the
    /// guest count, not by the seats of the allocated tables.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the request fails validation. Storage
    ///   is not touched.
    /// - [`Error::InsufficientCapacity`] if the free tables cannot seat the
    ///   party. Nothing is written.
    /// - [`Error::LockTimeout`] if another booking holds the lock past the
    ///   busy timeout.
    /// - [`Error::Database`] if any write fails. The transaction is rolled
    ///   back, so no partial state remains.
    pub fn book(&self, db: &mut Database, request: &BookingRequest) -> Result<Booking> {
        request.validate(self.booking.min_guests, self.booking.max_guests)?;

        let tx = db.begin_immediate()?;

        let inventory = Database::list_tables(&tx)?;
        let capacity = total_chairs(&inventory)?;
        let current = Database::load_daily_allocation(&tx, request.date)?
            .unwrap_or_else(|| DailyAllocation::empty(request.date, capacity));

        let free = free_tables(&inventory, &current.allocated_tables);
        let free_chairs = total_chairs(&free)?;
        let insufficient = || Error::InsufficientCapacity {
            date: request.date,
            requested: request.guests,
            free_chairs,
        };

        let Some(chosen) = pack_smallest_first(&free, request.guests) else {
            log::debug!(
                "no table combination seats {} on {} ({} free table(s))",
                request.guests,
                request.date,
                free.len()
            );
            return Err(insufficient());
        };
        let Some(remaining) = current.remaining_chairs.checked_sub(request.guests) else {
            return Err(insufficient());
        };

        let allocated: Vec<TableId> = chosen.iter().map(|t| t.id).collect();
        Database::save_daily_allocation(&tx, request.date, remaining, &allocated)?;

        let reservation_id = ReservationId::generate();
        let detail = ReservationDetail::from_request(reservation_id, request);
        Database::insert_reservation_detail(&tx, &detail)?;

        tx.commit()?;

        log::info!(
            "booked {} guest(s) on {} at table(s) {}",
            request.guests,
            request.date,
            join_ids(&allocated)
        );
        log::debug!("reservation {reservation_id}: {remaining} chair(s) remaining");

        Ok(Booking {
            reservation_id,
            allocated_tables: allocated,
        })
    }

    /// Lists every date with at least one booking, ordered by date.
    ///
    /// A date is [`DayStatus::Full`] when no table is free or no chairs
    /// remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the reads fail.
    pub fn available_days(&self, db: &Database) -> Result<Vec<DayAvailability>> {
        let tx = db.read_snapshot()?;
        let (inventory, allocations) = load_state(&tx)?;

        Ok(allocations
            .into_iter()
            .map(|day| {
                let free = free_tables(&inventory, &day.allocated_tables).len();
                let status = if free == 0 || day.remaining_chairs == 0 {
                    DayStatus::Full
                } else {
                    DayStatus::Available
                };
                DayAvailability {
                    date: day.date,
                    remaining_chairs: day.remaining_chairs,
                    allocated_tables: day.allocated_tables.into_iter().collect(),
                    status,
                }
            })
            .collect())
    }

    /// Returns the booked dates that fail the coarse preview for `guests`.
    ///
    /// The preview assumes every table seats
    /// [`PreviewPolicy::chairs_per_table`] guests and ignores real table
    /// sizes. A date missing from the result may still reject the booking,
    /// and a date in it may accept one. Dates without bookings are never
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `guests` is out of bounds, or an
    /// error if the reads fail.
    pub fn test_availability(&self, db: &Database, guests: u32) -> Result<Vec<UnavailableDay>> {
        self.booking.check_guests(guests)?;

        let tx = db.read_snapshot()?;
        let (inventory, allocations) = load_state(&tx)?;

        Ok(allocations
            .into_iter()
            .filter_map(|day| {
                let free = u32::try_from(free_tables(&inventory, &day.allocated_tables).len())
                    .unwrap_or(u32::MAX);
                if coarse_fit(
                    day.remaining_chairs,
                    free,
                    guests,
                    self.preview.chairs_per_table,
                ) {
                    None
                } else {
                    Some(UnavailableDay {
                        date: day.date,
                        remaining_chairs: day.remaining_chairs,
                        free_tables: free,
                    })
                }
            })
            .collect())
    }
}

fn load_state(conn: &Connection) -> Result<(Vec<Table>, Vec<DailyAllocation>)> {
    Ok((
        Database::list_tables(conn)?,
        Database::list_daily_allocations(conn)?,
    ))
}

fn join_ids(ids: &[TableId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database_with_tables, create_test_request};
    use crate::reservation::Contact;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn ids(raw: &[u32]) -> Vec<TableId> {
        raw.iter().copied().map(TableId::new).collect()
    }

    #[test]
    fn test_book_takes_smallest_tables_first() {
        let (mut db, _) = create_test_database_with_tables(&[2, 4, 6]);
        let allocator = ReservationAllocator::default();

        let booking = allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 5))
            .unwrap();
        assert_eq!(booking.allocated_tables, ids(&[1, 2]));

        let stored = Database::load_daily_allocation(db.connection(), day(1))
            .unwrap()
            .unwrap();
        assert_eq!(stored.remaining_chairs, 7);
        assert_eq!(stored.allocated_tables.len(), 2);

        let detail = Database::get_reservation_detail(db.connection(), booking.reservation_id)
            .unwrap()
            .unwrap();
        assert_eq!(detail.guest_count, 5);
    }

    #[test]
    fn test_capacity_boundary() {
        let (mut db, _) = create_test_database_with_tables(&[4, 6]);
        let allocator = ReservationAllocator::default();

        let first = allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 7))
            .unwrap();
        assert_eq!(first.allocated_tables, ids(&[1, 2]));

        let days = allocator.available_days(&db).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].remaining_chairs, 3);
        assert_eq!(days[0].status, DayStatus::Full);

        let err = allocator
            .book(&mut db, &create_test_request("2024-05-01", "20:00", 1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCapacity {
                requested: 1,
                free_chairs: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_failed_booking_writes_nothing() {
        let (mut db, _) = create_test_database_with_tables(&[2, 2]);
        let allocator = ReservationAllocator::default();

        let err = allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 6))
            .unwrap_err();
        assert!(err.is_capacity());
        assert!(Database::load_daily_allocation(db.connection(), day(1))
            .unwrap()
            .is_none());
        assert!(Database::list_reservation_details(db.connection(), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_request_touches_no_storage() {
        let (mut db, _) = create_test_database_with_tables(&[4]);
        let allocator = ReservationAllocator::default();

        for guests in [0, 11] {
            let err = allocator
                .book(&mut db, &create_test_request("2024-05-01", "19:00", guests))
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "guests"));
        }

        let mut request = create_test_request("2024-05-01", "19:00", 2);
        request.contact = Contact::new("  ", "555-0100");
        let err = allocator.book(&mut db, &request).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "name"));

        assert!(allocator.available_days(&db).unwrap().is_empty());
    }

    #[test]
    fn test_no_tables_is_insufficient_capacity() {
        let (mut db, _) = create_test_database_with_tables(&[]);
        let err = ReservationAllocator::default()
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 1))
            .unwrap_err();
        assert!(err.is_capacity());
    }

    #[test]
    fn test_dates_are_independent() {
        let (mut db, _) = create_test_database_with_tables(&[4]);
        let allocator = ReservationAllocator::default();

        let a = allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 4))
            .unwrap();
        let b = allocator
            .book(&mut db, &create_test_request("2024-05-02", "19:00", 4))
            .unwrap();
        assert_eq!(a.allocated_tables, b.allocated_tables);
        assert_ne!(a.reservation_id, b.reservation_id);
    }

    #[test]
    fn test_available_days_is_read_only() {
        let (mut db, _) = create_test_database_with_tables(&[2, 4, 6]);
        let allocator = ReservationAllocator::default();
        allocator
            .book(&mut db, &create_test_request("2024-05-02", "19:00", 3))
            .unwrap();
        allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 2))
            .unwrap();

        let first = allocator.available_days(&db).unwrap();
        let second = allocator.available_days(&db).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].date, day(1));
        assert_eq!(first[0].allocated_tables, ids(&[1]));
        assert_eq!(first[0].status, DayStatus::Available);
        assert_eq!(first[1].date, day(2));
        assert_eq!(first[1].remaining_chairs, 9);
    }

    #[test]
    fn test_availability_preview() {
        let (mut db, _) = create_test_database_with_tables(&[2, 4, 6]);
        let allocator = ReservationAllocator::default();
        allocator
            .book(&mut db, &create_test_request("2024-05-01", "19:00", 5))
            .unwrap();
        allocator
            .book(&mut db, &create_test_request("2024-05-02", "19:00", 1))
            .unwrap();

        // 2024-05-01: 7 chairs left, one free table
        assert!(allocator.test_availability(&db, 5).unwrap().is_empty());

        let unavailable = allocator.test_availability(&db, 6).unwrap();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].date, day(1));
        assert_eq!(unavailable[0].remaining_chairs, 7);
        assert_eq!(unavailable[0].free_tables, 1);

        let unavailable = allocator.test_availability(&db, 10).unwrap();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].date, day(1));
    }

    #[test]
    fn test_availability_rejects_bad_guest_count() {
        let (db, _) = create_test_database_with_tables(&[4]);
        let allocator = ReservationAllocator::default();
        assert!(allocator.test_availability(&db, 0).is_err());
        assert!(allocator.test_availability(&db, 11).is_err());
    }

    #[test]
    fn test_policies_from_config() {
        let mut config = Config::with_defaults();
        config.preview = Some(crate::config::PreviewConfig {
            chairs_per_table: Some(4),
        });
        let allocator = ReservationAllocator::from_config(&config);
        assert_eq!(allocator.preview_policy().chairs_per_table, 4);
        assert_eq!(allocator.booking_policy(), BookingPolicy::default());
    }
}
