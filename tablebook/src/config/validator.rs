//! Configuration validation.

use crate::config::schema::{Config, MAX_GUESTS_LIMIT};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks that the guest bounds satisfy `1 <= min <= max <= 10`, and
    /// that the preview chairs-per-table and the lock wait are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let min = config.min_guests();
        let max = config.max_guests();

        if min == 0 {
            return Err(Error::InvalidInput {
                field: "booking.min_guests".into(),
                message: "must be at least 1".into(),
            });
        }

        if max > MAX_GUESTS_LIMIT {
            return Err(Error::InvalidInput {
                field: "booking.max_guests".into(),
                message: format!("cannot exceed {MAX_GUESTS_LIMIT}, got {max}"),
            });
        }

        if min > max {
            return Err(Error::InvalidInput {
                field: "booking".into(),
                message: format!("min_guests ({min}) exceeds max_guests ({max})"),
            });
        }

        if config.preview_chairs_per_table() == 0 {
            return Err(Error::InvalidInput {
                field: "preview.chairs_per_table".into(),
                message: "must be greater than 0".into(),
            });
        }

        if config.lock_wait_seconds() == 0 {
            return Err(Error::InvalidInput {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }
}
