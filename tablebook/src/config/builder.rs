//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources are applied lowest precedence first: built-in defaults, the
/// data directory's `config.yaml`, `TABLEBOOK_*` environment variables, and
/// finally any programmatic override. The result is validated.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `data_dir` instead of the resolved default.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Skips configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges the sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, an environment
    /// variable is malformed, or the merged values are invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => resolve_data_dir()?,
            };
            if let Some(file) = ConfigLoader::load_from_data_dir(&data_dir)? {
                ConfigMerger::merge_into(&mut config, &file);
            }
        }

        if !self.skip_env {
            ConfigMerger::merge_into(&mut config, &EnvironmentConfig::from_env()?);
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::BookingConfig;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    #[serial]
    fn test_file_then_env_then_override() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "booking:\n  min_guests: 2\n  max_guests: 6\nmaximum_lock_wait_seconds: 9\n",
        )
        .unwrap();
        std::env::set_var("TABLEBOOK_MAX_GUESTS", "8");

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(Config {
                maximum_lock_wait_seconds: Some(20),
                ..Default::default()
            })
            .build();
        std::env::remove_var("TABLEBOOK_MAX_GUESTS");
        let config = config.unwrap();

        assert_eq!(config.min_guests(), 2);
        assert_eq!(config.max_guests(), 8);
        assert_eq!(config.lock_wait_seconds(), 20);
        assert_eq!(config.preview_chairs_per_table(), 5);
    }

    #[test]
    fn test_invalid_merge_is_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                booking: Some(BookingConfig {
                    min_guests: Some(7),
                    max_guests: Some(3),
                }),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
