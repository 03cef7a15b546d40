//! Greedy smallest-first table packing.

use std::collections::BTreeSet;

use crate::table::{Table, TableId};

/// Returns the tables of `inventory` that are not in `allocated`.
#[must_use]
pub fn free_tables(inventory: &[Table], allocated: &BTreeSet<TableId>) -> Vec<Table> {
    inventory
        .iter()
        .filter(|t| !allocated.contains(&t.id))
        .copied()
        .collect()
}

/// Picks whole tables from `available` until they seat `guests`.
///
/// Tables are consumed smallest first (ties broken by id), so large tables
/// stay free for large parties. The last table taken may have more chairs
/// than are still needed; the surplus goes unused.
///
/// Returns `None` if all of `available` together cannot seat `guests`.
///
/// # Examples
///
/// ```
/// use tablebook::allocation::pack_smallest_first;
/// use tablebook::{Chairs, Table, TableId};
///
/// let tables: Vec<Table> = [(1, 6), (2, 2), (3, 4)]
///     .into_iter()
///     .map(|(id, n)| Table::new(TableId::new(id), Chairs::try_from(n).unwrap()))
///     .collect();
///
/// let picked = pack_smallest_first(&tables, 5).unwrap();
/// let ids: Vec<u32> = picked.iter().map(|t| t.id.value()).collect();
/// assert_eq!(ids, vec![2, 3]);
///
/// assert!(pack_smallest_first(&tables, 13).is_none());
/// ```
#[must_use]
pub fn pack_smallest_first(available: &[Table], guests: u32) -> Option<Vec<Table>> {
    let mut sorted = available.to_vec();
    sorted.sort_by_key(|t| (t.chairs, t.id));

    let mut required = i64::from(guests);
    let mut picked = Vec::new();
    for table in sorted {
        if required <= 0 {
            break;
        }
        required -= i64::from(table.chairs.value());
        picked.push(table);
    }

    (required <= 0).then_some(picked)
}
