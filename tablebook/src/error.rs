//! Error types for the tablebook library.
//!
//! All fallible operations return [`Error`]. Callers that only need the
//! coarse failure class (client error, capacity, storage) use
//! [`Error::kind`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::table::TableId;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before storage was touched.
    #[error("invalid input for '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// No combination of free tables covers the requested party.
    #[error("insufficient capacity on {date}: {requested} guest(s) requested, {free_chairs} chair(s) on free tables")]
    InsufficientCapacity {
        /// The requested date.
        date: NaiveDate,
        /// The requested guest count.
        requested: u32,
        /// Total chairs of the tables still unallocated on that date.
        free_chairs: u32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The storage lock could not be acquired in time.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A table cannot be removed while bookings hold it.
    #[error("table {id} is allocated on {} date(s)", dates.len())]
    TableInUse {
        /// The table that was to be removed.
        id: TableId,
        /// Dates on which the table is allocated.
        dates: Vec<NaiveDate>,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller sent a bad request.
    InvalidInput,
    /// The request was valid but could not be seated.
    InsufficientCapacity,
    /// Storage, configuration or I/O failure on the server side.
    Storage,
    /// A referenced table or reservation does not exist.
    NotFound,
    /// The request conflicts with existing bookings.
    Conflict,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::InsufficientCapacity => write!(f, "insufficient capacity"),
            Self::Storage => write!(f, "storage error"),
            Self::NotFound => write!(f, "not found"),
            Self::Conflict => write!(f, "conflict"),
        }
    }
}

impl From<crate::table::InvalidChairsError> for Error {
    fn from(err: crate::table::InvalidChairsError) -> Self {
        Self::InvalidInput {
            field: "chairs".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::InvalidInput {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`].
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Maps a rusqlite error raised under `busy_timeout` to [`Error::LockTimeout`].
    pub(crate) fn from_locked(err: rusqlite::Error, busy_timeout: std::time::Duration) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref e, _)
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                Self::LockTimeout {
                    seconds: busy_timeout.as_secs(),
                }
            }
            other => Self::Database(other),
        }
    }

    /// Returns the failure class of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Error, FailureKind};
    ///
    /// let err = Error::LockTimeout { seconds: 5 };
    /// assert_eq!(err.kind(), FailureKind::Storage);
    /// ```
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidInput { .. } => FailureKind::InvalidInput,
            Self::InsufficientCapacity { .. } => FailureKind::InsufficientCapacity,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::TableInUse { .. } => FailureKind::Conflict,
            Self::Database(_)
            | Self::LockTimeout { .. }
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::UnsupportedSchemaVersion { .. } => FailureKind::Storage,
        }
    }

    /// Check if the caller could succeed by picking another date or party size.
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::InsufficientCapacity { .. })
    }
}
