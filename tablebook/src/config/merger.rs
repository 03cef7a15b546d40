//! Layering of partial configurations.

use crate::config::schema::{BookingConfig, Config, PreviewConfig};

/// Merges configurations field by field.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Overlays `higher` onto `base`. Fields set in `higher` win; fields it
    /// leaves unset keep the value from `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::config::{Config, ConfigMerger};
    ///
    /// let mut base = Config::with_defaults();
    /// let higher = Config {
    ///     maximum_lock_wait_seconds: Some(30),
    ///     ..Default::default()
    /// };
    /// ConfigMerger::merge_into(&mut base, &higher);
    /// assert_eq!(base.lock_wait_seconds(), 30);
    /// assert_eq!(base.max_guests(), 10);
    /// ```
    pub fn merge_into(base: &mut Config, higher: &Config) {
        if let Some(ref booking) = higher.booking {
            let target = base.booking.get_or_insert_with(BookingConfig::default);
            if booking.min_guests.is_some() {
                target.min_guests = booking.min_guests;
            }
            if booking.max_guests.is_some() {
                target.max_guests = booking.max_guests;
            }
        }

        if let Some(ref preview) = higher.preview {
            let target = base.preview.get_or_insert_with(PreviewConfig::default);
            if preview.chairs_per_table.is_some() {
                target.chairs_per_table = preview.chairs_per_table;
            }
        }

        if higher.maximum_lock_wait_seconds.is_some() {
            base.maximum_lock_wait_seconds = higher.maximum_lock_wait_seconds;
        }
    }
}
