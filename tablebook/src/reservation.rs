//! Reservation types: booking requests, per-date allocations and the
//! customer-facing detail records.
//!
//! Detail records are never handed out directly to callers that render
//! them. [`ReservationDetail::view`] builds an explicit projection for the
//! requested [`Audience`] instead.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::table::TableId;

/// Wall-clock format used when storing and rendering reservation times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Validation error for reservation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Externally exposed reservation identifier.
///
/// Identifiers are random UUIDs; the detail table uses them as its primary
/// key, so a collision aborts the booking instead of aliasing two records.
///
/// # Examples
///
/// ```
/// use tablebook::ReservationId;
///
/// let a = ReservationId::generate();
/// let b = ReservationId::generate();
/// assert_ne!(a, b);
///
/// let parsed: ReservationId = a.to_string().parse().unwrap();
/// assert_eq!(parsed, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| ValidationError {
                field: "reservation_id".into(),
                message: e.to_string(),
            })
    }
}

/// Contact details of the person making a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Guest name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl Contact {
    /// Creates a contact with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            notes: None,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Checks that name and phone are present.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("name", &self.name), ("phone", &self.phone)] {
            if value.trim().is_empty() {
                return Err(ValidationError {
                    field: field.into(),
                    message: "must be non-empty".into(),
                });
            }
        }
        Ok(())
    }
}

/// A request to book tables for a party.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::{BookingRequest, Contact};
///
/// let request = BookingRequest::new(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
///     4,
///     Contact::new("Ada", "555-0100"),
/// );
/// assert_eq!(request.guests, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// Local wall-clock arrival time.
    pub time: NaiveTime,
    /// Party size.
    pub guests: u32,
    /// Contact details.
    pub contact: Contact,
}

impl BookingRequest {
    /// Creates a booking request.
    #[must_use]
    pub fn new(date: NaiveDate, time: NaiveTime, guests: u32, contact: Contact) -> Self {
        Self {
            date,
            time,
            guests,
            contact,
        }
    }

    /// Validates the party size against `min..=max` and the contact fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest count is out of bounds or a required
    /// contact field is empty.
    pub fn validate(&self, min_guests: u32, max_guests: u32) -> Result<(), ValidationError> {
        if !(min_guests..=max_guests).contains(&self.guests) {
            return Err(ValidationError {
                field: "guests".into(),
                message: format!(
                    "must be between {min_guests} and {max_guests}, got {}",
                    self.guests
                ),
            });
        }
        self.contact.validate()
    }
}

/// Aggregate table accounting for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAllocation {
    /// The date this record covers.
    pub date: NaiveDate,
    /// Total capacity minus every guest booked on this date.
    pub remaining_chairs: u32,
    /// Tables assigned to bookings on this date.
    pub allocated_tables: BTreeSet<TableId>,
}

impl DailyAllocation {
    /// The state of a date before its first booking.
    #[must_use]
    pub fn empty(date: NaiveDate, total_capacity: u32) -> Self {
        Self {
            date,
            remaining_chairs: total_capacity,
            allocated_tables: BTreeSet::new(),
        }
    }
}

/// The outcome of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Identifier of the new reservation.
    pub reservation_id: ReservationId,
    /// Tables newly assigned to this booking, smallest first.
    pub allocated_tables: Vec<TableId>,
}

/// Whether a date can still take bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// At least one table is free and chairs remain.
    Available,
    /// Every table is allocated or no chairs remain.
    Full,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// One row of the booked-days overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// The date.
    pub date: NaiveDate,
    /// Chairs left after deducting booked guests.
    pub remaining_chairs: u32,
    /// Tables already allocated on this date.
    pub allocated_tables: Vec<TableId>,
    /// Booking status.
    pub status: DayStatus,
}

/// A date that fails the coarse availability preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableDay {
    /// The date.
    pub date: NaiveDate,
    /// Chairs left after deducting booked guests.
    pub remaining_chairs: u32,
    /// Number of tables not yet allocated.
    pub free_tables: u32,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetail {
    /// Reservation identifier.
    pub reservation_id: ReservationId,
    /// Contact details as given at booking time.
    pub contact: Contact,
    /// Party size.
    pub guest_count: u32,
    /// Booked date.
    pub date: NaiveDate,
    /// Booked time.
    pub time: NaiveTime,
    /// When the booking was recorded.
    pub created_at: DateTime<Utc>,
}

impl ReservationDetail {
    /// Builds the detail record for a validated request.
    #[must_use]
    pub fn from_request(reservation_id: ReservationId, request: &BookingRequest) -> Self {
        Self {
            reservation_id,
            contact: request.contact.clone(),
            guest_count: request.guests,
            date: request.date,
            time: request.time,
            created_at: Utc::now(),
        }
    }

    /// Projects this record for `audience`.
    #[must_use]
    pub fn view(&self, audience: Audience) -> ReservationView {
        match audience {
            Audience::Admin => ReservationView::Admin(AdminReservationView::from(self)),
            Audience::Public => ReservationView::Public(PublicReservationView::from(self)),
        }
    }
}

/// Who a reservation is being shown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    /// Staff with access to contact details.
    Admin,
    /// Anyone else.
    #[default]
    Public,
}

/// Full reservation record for staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminReservationView {
    /// Reservation identifier.
    pub reservation_id: ReservationId,
    /// Guest name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address, if given.
    pub email: Option<String>,
    /// Party size.
    pub guest_count: u32,
    /// Booked date.
    pub date: NaiveDate,
    /// Booked time, `HH:MM`.
    pub time: String,
    /// Notes, if given.
    pub notes: Option<String>,
    /// When the booking was recorded.
    pub created_at: DateTime<Utc>,
}

impl From<&ReservationDetail> for AdminReservationView {
    fn from(detail: &ReservationDetail) -> Self {
        Self {
            reservation_id: detail.reservation_id,
            name: detail.contact.name.clone(),
            phone: detail.contact.phone.clone(),
            email: detail.contact.email.clone(),
            guest_count: detail.guest_count,
            date: detail.date,
            time: detail.time.format(TIME_FORMAT).to_string(),
            notes: detail.contact.notes.clone(),
            created_at: detail.created_at,
        }
    }
}

/// Reservation record without contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicReservationView {
    /// Reservation identifier.
    pub reservation_id: ReservationId,
    /// Party size.
    pub guest_count: u32,
    /// Booked date.
    pub date: NaiveDate,
    /// Booked time, `HH:MM`.
    pub time: String,
}

impl From<&ReservationDetail> for PublicReservationView {
    fn from(detail: &ReservationDetail) -> Self {
        Self {
            reservation_id: detail.reservation_id,
            guest_count: detail.guest_count,
            date: detail.date,
            time: detail.time.format(TIME_FORMAT).to_string(),
        }
    }
}

/// A reservation projected for a particular [`Audience`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReservationView {
    /// Staff projection.
    Admin(AdminReservationView),
    /// Public projection.
    Public(PublicReservationView),
}

impl ReservationView {
    /// Identifier of the underlying reservation.
    #[must_use]
    pub fn reservation_id(&self) -> ReservationId {
        match self {
            Self::Admin(v) => v.reservation_id,
            Self::Public(v) => v.reservation_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(guests: u32) -> BookingRequest {
        BookingRequest::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            guests,
            Contact::new("Ada", "555-0100").with_email(Some("ada@example.com".into())),
        )
    }

    #[test]
    fn test_guest_bounds() {
        assert!(request(1).validate(1, 10).is_ok());
        assert!(request(10).validate(1, 10).is_ok());

        let err = request(0).validate(1, 10).unwrap_err();
        assert_eq!(err.field, "guests");
        let err = request(11).validate(1, 10).unwrap_err();
        assert!(err.message.contains("got 11"));
    }

    #[test]
    fn test_contact_requires_name_and_phone() {
        let mut req = request(2);
        req.contact.name = "   ".into();
        assert_eq!(req.validate(1, 10).unwrap_err().field, "name");

        let mut req = request(2);
        req.contact.phone = String::new();
        assert_eq!(req.validate(1, 10).unwrap_err().field, "phone");
    }

    #[test]
    fn test_reservation_id_parse() {
        let id = ReservationId::generate();
        let parsed: ReservationId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<ReservationId>().is_err());
    }

    #[test]
    fn test_public_view_hides_contact() {
        let detail = ReservationDetail::from_request(ReservationId::generate(), &request(3));
        let public = serde_json::to_value(detail.view(Audience::Public)).unwrap();
        assert!(public.get("name").is_none());
        assert!(public.get("phone").is_none());
        assert!(public.get("email").is_none());
        assert_eq!(public["time"], "19:30");
        assert_eq!(public["guest_count"], 3);
    }

    #[test]
    fn test_admin_view_keeps_contact() {
        let detail = ReservationDetail::from_request(ReservationId::generate(), &request(3));
        let view = detail.view(Audience::Admin);
        assert_eq!(view.reservation_id(), detail.reservation_id);
        match view {
            ReservationView::Admin(admin) => {
                assert_eq!(admin.name, "Ada");
                assert_eq!(admin.email.as_deref(), Some("ada@example.com"));
            }
            ReservationView::Public(_) => panic!("expected admin view"),
        }
    }

    #[test]
    fn test_empty_daily_allocation() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let alloc = DailyAllocation::empty(date, 10);
        assert_eq!(alloc.remaining_chairs, 10);
        assert!(alloc.allocated_tables.is_empty());
    }
}
