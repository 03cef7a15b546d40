//! Coarse availability check used for calendar previews.
//!
//! Unlike [`pack_smallest_first`](super::pack_smallest_first), this check
//! ignores the real table sizes and assumes every table seats the same
//! number of guests. The two can disagree: a date may pass the preview and
//! still reject the booking, or the other way round.

/// Number of tables a party needs if every table seats `chairs_per_table`.
///
/// # Examples
///
/// ```
/// use tablebook::allocation::required_tables;
///
/// assert_eq!(required_tables(5, 5), 1);
/// assert_eq!(required_tables(6, 5), 2);
/// assert_eq!(required_tables(10, 5), 2);
/// ```
#[must_use]
pub fn required_tables(guests: u32, chairs_per_table: u32) -> u32 {
    guests.div_ceil(chairs_per_table.max(1))
}

/// Returns `true` if a date with `remaining_chairs` and `free_tables`
/// unallocated tables passes the preview for `guests`.
#[must_use]
pub fn coarse_fit(
    remaining_chairs: u32,
    free_tables: u32,
    guests: u32,
    chairs_per_table: u32,
) -> bool {
    remaining_chairs >= guests && free_tables >= required_tables(guests, chairs_per_table)
}
