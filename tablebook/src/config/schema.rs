//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Default smallest party accepted by a booking.
pub const DEFAULT_MIN_GUESTS: u32 = 1;

/// Default largest party accepted by a booking.
pub const DEFAULT_MAX_GUESTS: u32 = 10;

/// Hard upper bound on party size, also enforced by the storage schema.
pub const MAX_GUESTS_LIMIT: u32 = 10;

/// Default chairs-per-table assumption of the availability preview.
pub const DEFAULT_PREVIEW_CHAIRS_PER_TABLE: u32 = 5;

/// Default maximum wait for the database write lock.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so partial files and overrides can be layered;
/// [`crate::config::ConfigBuilder`] fills in the defaults.
///
/// # Examples
///
/// ```
/// use tablebook::config::Config;
///
/// let config: Config = serde_yaml::from_str("booking:\n  max_guests: 8\n").unwrap();
/// assert_eq!(config.booking.unwrap().max_guests, Some(8));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Party size bounds.
    pub booking: Option<BookingConfig>,

    /// Availability preview settings.
    pub preview: Option<PreviewConfig>,

    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Party size bounds for bookings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Smallest accepted party.
    pub min_guests: Option<u32>,
    /// Largest accepted party.
    pub max_guests: Option<u32>,
}

/// Settings for the coarse availability preview.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreviewConfig {
    /// Chairs assumed at every table.
    pub chairs_per_table: Option<u32>,
}

impl Config {
    /// The built-in defaults with every field populated.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            booking: Some(BookingConfig {
                min_guests: Some(DEFAULT_MIN_GUESTS),
                max_guests: Some(DEFAULT_MAX_GUESTS),
            }),
            preview: Some(PreviewConfig {
                chairs_per_table: Some(DEFAULT_PREVIEW_CHAIRS_PER_TABLE),
            }),
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
        }
    }

    /// Smallest accepted party, falling back to the default.
    #[must_use]
    pub fn min_guests(&self) -> u32 {
        self.booking
            .as_ref()
            .and_then(|b| b.min_guests)
            .unwrap_or(DEFAULT_MIN_GUESTS)
    }

    /// Largest accepted party, falling back to the default.
    #[must_use]
    pub fn max_guests(&self) -> u32 {
        self.booking
            .as_ref()
            .and_then(|b| b.max_guests)
            .unwrap_or(DEFAULT_MAX_GUESTS)
    }

    /// Preview chairs-per-table, falling back to the default.
    #[must_use]
    pub fn preview_chairs_per_table(&self) -> u32 {
        self.preview
            .as_ref()
            .and_then(|p| p.chairs_per_table)
            .unwrap_or(DEFAULT_PREVIEW_CHAIRS_PER_TABLE)
    }

    /// Lock wait in seconds, falling back to the default.
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }
}
