//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the configuration file for `data_dir`.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads `config.yaml` from `data_dir` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<Config>> {
        let path = Self::config_path(data_dir);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Loads and parses a single configuration file.
    ///
    /// A file holding only blank lines and comments yields the empty
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let blank = contents.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if blank {
            return Ok(Config::default());
        }
        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes `config` to `data_dir/config.yaml`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_to_data_dir(data_dir: &Path, config: &Config) -> Result<PathBuf> {
        fs::create_dir_all(data_dir)?;
        let path = Self::config_path(data_dir);
        fs::write(&path, serde_yaml::to_string(config)?)?;
        Ok(path)
    }
}
