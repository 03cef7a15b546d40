//! Dining table inventory types.
//!
//! A [`Table`] is the atomic allocation unit: bookings always take whole
//! tables, never loose chairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest number of chairs a single table may have.
pub const MAX_CHAIRS_PER_TABLE: u32 = 100;

/// Identifier of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(u32);

impl TableId {
    /// Wraps a raw table identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seating capacity of a table, between 1 and [`MAX_CHAIRS_PER_TABLE`].
///
/// # Examples
///
/// ```
/// use tablebook::Chairs;
///
/// let chairs = Chairs::try_from(4).unwrap();
/// assert_eq!(chairs.value(), 4);
///
/// assert!(Chairs::try_from(0).is_err());
/// assert!(Chairs::try_from(1_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Chairs(u32);

impl Chairs {
    /// Returns the number of chairs.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Chairs {
    type Error = InvalidChairsError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        if (1..=MAX_CHAIRS_PER_TABLE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidChairsError { value })
        }
    }
}

impl From<Chairs> for u32 {
    fn from(chairs: Chairs) -> Self {
        chairs.0
    }
}

impl fmt::Display for Chairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for a chair count outside `1..=MAX_CHAIRS_PER_TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChairsError {
    /// The rejected value.
    pub value: u32,
}

impl fmt::Display for InvalidChairsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a table seats between 1 and {MAX_CHAIRS_PER_TABLE} chairs, got {}",
            self.value
        )
    }
}

impl std::error::Error for InvalidChairsError {}

/// A physical table in the dining room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Table identifier.
    pub id: TableId,
    /// Number of chairs at the table.
    pub chairs: Chairs,
}

impl Table {
    /// Creates a table.
    #[must_use]
    pub const fn new(id: TableId, chairs: Chairs) -> Self {
        Self { id, chairs }
    }
}

/// Sums the chair capacity of `tables`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the sum does not fit in a `u32`.
pub fn total_chairs<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Result<u32> {
    tables
        .into_iter()
        .try_fold(0u32, |sum, t| sum.checked_add(t.chairs.value()))
        .ok_or_else(|| Error::invalid("chairs", "total capacity of the inventory is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chairs_rejects_zero() {
        let err = Chairs::try_from(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert!(err.to_string().contains("between 1 and 100"));
    }

    #[test]
    fn test_chairs_rejects_oversized_table() {
        assert_eq!(
            Chairs::try_from(MAX_CHAIRS_PER_TABLE).unwrap().value(),
            MAX_CHAIRS_PER_TABLE
        );
        let err = Chairs::try_from(4_000_000_000).unwrap_err();
        assert_eq!(err.value, 4_000_000_000);
    }

    #[test]
    fn test_chairs_ordering() {
        let two = Chairs::try_from(2).unwrap();
        let six = Chairs::try_from(6).unwrap();
        assert!(two < six);
    }

    #[test]
    fn test_chairs_serde_rejects_zero() {
        assert!(serde_json::from_str::<Chairs>("0").is_err());
        let chairs: Chairs = serde_json::from_str("4").unwrap();
        assert_eq!(chairs.value(), 4);
    }

    #[test]
    fn test_total_chairs() {
        let tables = [
            Table::new(TableId::new(1), Chairs::try_from(4).unwrap()),
            Table::new(TableId::new(2), Chairs::try_from(6).unwrap()),
        ];
        assert_eq!(total_chairs(&tables).unwrap(), 10);
        assert_eq!(total_chairs(&Vec::<Table>::new()).unwrap(), 0);
    }

    #[test]
    fn test_total_chairs_overflow_is_an_error() {
        let tables = [
            Table::new(TableId::new(1), Chairs(4_000_000_000)),
            Table::new(TableId::new(2), Chairs(500_000_000)),
        ];

        let err = total_chairs(&tables).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "chairs"));
    }

    #[test]
    fn test_table_id_display() {
        assert_eq!(TableId::new(12).to_string(), "12");
    }
}
