//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TABLEBOOK_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{BookingConfig, Config, PreviewConfig};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Reads every `TABLEBOOK_*` variable into a partial configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a non-numeric value.
    pub fn from_env() -> Result<Config> {
        let mut config = Config::default();

        if let Some(min) = Self::read_number::<u32>("TABLEBOOK_MIN_GUESTS")? {
            config
                .booking
                .get_or_insert_with(BookingConfig::default)
                .min_guests = Some(min);
        }

        if let Some(max) = Self::read_number::<u32>("TABLEBOOK_MAX_GUESTS")? {
            config
                .booking
                .get_or_insert_with(BookingConfig::default)
                .max_guests = Some(max);
        }

        if let Some(chairs) = Self::read_number::<u32>("TABLEBOOK_PREVIEW_CHAIRS_PER_TABLE")? {
            config
                .preview
                .get_or_insert_with(PreviewConfig::default)
                .chairs_per_table = Some(chairs);
        }

        config.maximum_lock_wait_seconds =
            Self::read_number::<u64>("TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS")?;

        Ok(config)
    }

    fn read_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
        match env::var(name) {
            Ok(raw) => raw.trim().parse().map(Some).map_err(|_| Error::InvalidInput {
                field: name.into(),
                message: format!("must be a non-negative integer, got '{raw}'"),
            }),
            Err(_) => Ok(None),
        }
    }
}
