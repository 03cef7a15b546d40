//! Configuration system for tablebook.
//!
//! Configuration is merged from these sources (highest precedence first):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`TABLEBOOK_*`)
//! 3. `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use tablebook::config::{BookingConfig, Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         booking: Some(BookingConfig {
//!             min_guests: Some(2),
//!             max_guests: None,
//!         }),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.min_guests(), 2);
//! assert_eq!(config.max_guests(), 10);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{
    BookingConfig, Config, PreviewConfig, DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_MAX_GUESTS,
    DEFAULT_MIN_GUESTS, DEFAULT_PREVIEW_CHAIRS_PER_TABLE, MAX_GUESTS_LIMIT,
};
pub use validator::ConfigValidator;
