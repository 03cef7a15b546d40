//! Property-based tests for table packing.
//!
//! These complement the example-based tests in `packing.rs` by checking
//! invariants over random inventories and party sizes.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use super::{coarse_fit, free_tables, pack_smallest_first, required_tables};
use crate::table::{total_chairs, Chairs, Table, TableId};

// ============================================================================
// STRATEGY DEFINITIONS
// ============================================================================

/// Inventories of up to 12 tables with 1-12 chairs and distinct ids.
fn inventory_strategy() -> impl Strategy<Value = Vec<Table>> {
    prop::collection::vec(1u32..=12, 0..12).prop_map(|sizes| {
        sizes
            .into_iter()
            .enumerate()
            .map(|(i, n)| {
                let id = u32::try_from(i).unwrap() + 1;
                Table::new(TableId::new(id), Chairs::try_from(n).unwrap())
            })
            .collect()
    })
}

proptest! {
    /// A successful packing seats everyone using distinct inventory tables.
    #[test]
    fn packing_covers_party(inventory in inventory_strategy(), guests in 1u32..=10) {
        if let Some(picked) = pack_smallest_first(&inventory, guests) {
            prop_assert!(total_chairs(&picked).unwrap() >= guests);

            let ids: HashSet<_> = picked.iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), picked.len());
            prop_assert!(picked.iter().all(|t| inventory.contains(t)));
        }
    }

    /// Packing fails exactly when the whole inventory is too small.
    #[test]
    fn packing_fails_only_when_inventory_too_small(
        inventory in inventory_strategy(),
        guests in 1u32..=10,
    ) {
        let fits = total_chairs(&inventory).unwrap() >= guests;
        prop_assert_eq!(pack_smallest_first(&inventory, guests).is_some(), fits);
    }

    /// Every table left over is at least as large as every table taken.
    #[test]
    fn packing_takes_smallest_tables(inventory in inventory_strategy(), guests in 1u32..=10) {
        if let Some(picked) = pack_smallest_first(&inventory, guests) {
            let taken: BTreeSet<_> = picked.iter().map(|t| t.id).collect();
            let largest_taken = picked.iter().map(|t| t.chairs).max();
            for rest in free_tables(&inventory, &taken) {
                prop_assert!(Some(rest.chairs) >= largest_taken);
            }
        }
    }

    /// Dropping the last table taken always leaves the party unseated.
    #[test]
    fn packing_takes_no_spare_tables(inventory in inventory_strategy(), guests in 1u32..=10) {
        if let Some(picked) = pack_smallest_first(&inventory, guests) {
            let without_last = &picked[..picked.len() - 1];
            prop_assert!(total_chairs(without_last).unwrap() < guests);
        }
    }

    /// Repeated packings on what is left never hand out a table twice.
    #[test]
    fn sequential_packings_are_disjoint(
        inventory in inventory_strategy(),
        parties in prop::collection::vec(1u32..=10, 1..6),
    ) {
        let mut allocated = BTreeSet::new();
        for guests in parties {
            let available = free_tables(&inventory, &allocated);
            if let Some(picked) = pack_smallest_first(&available, guests) {
                for table in picked {
                    prop_assert!(allocated.insert(table.id));
                }
            }
        }
    }

    /// The preview never asks for more tables than guests.
    #[test]
    fn required_tables_bounded(guests in 1u32..=10, per_table in 1u32..=12) {
        let n = required_tables(guests, per_table);
        prop_assert!(n >= 1);
        prop_assert!(n <= guests);
        prop_assert!(n * per_table >= guests);
    }

    /// More free tables or chairs never turns a passing preview into a failing one.
    #[test]
    fn coarse_fit_monotonic(
        remaining in 0u32..=40,
        free in 0u32..=8,
        guests in 1u32..=10,
    ) {
        if coarse_fit(remaining, free, guests, 5) {
            prop_assert!(coarse_fit(remaining + 1, free, guests, 5));
            prop_assert!(coarse_fit(remaining, free + 1, guests, 5));
        }
    }
}
