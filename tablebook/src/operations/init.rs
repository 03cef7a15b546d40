//! Data directory initialization.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

/// Options for [`init_database`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a commented default `config.yaml`.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates options for `data_dir` with nothing overwritten and no config.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What [`init_database`] did.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was written.
    pub config_created: bool,
    /// The initialized data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# tablebook configuration

# Accepted party sizes (at most 10)
# booking:
#   min_guests: 1
#   max_guests: 10

# Seats per table assumed by the availability preview
# preview:
#   chairs_per_table: 5

# Maximum wait for the database lock, in seconds
# maximum_lock_wait_seconds: 5
";

/// Creates the data directory and database, and optionally a config file.
///
/// An existing `config.yaml` is never overwritten.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the database exists and
/// `overwrite` is unset, or an I/O or storage error.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use tablebook::operations::{init_database, InitOptions};
///
/// let options = InitOptions::new(PathBuf::from("/tmp/tablebook")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::InvalidInput {
                field: "database".into(),
                message: format!(
                    "database already exists at {}. Use --overwrite to replace it.",
                    db_path.display()
                ),
            });
        }
        fs::remove_file(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;
    log::info!("initialized database at {}", db_path.display());

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
