//! Collapsing date ranges into distinct project allocations.

use std::collections::HashSet;

use crate::booking::{BookingGrouping, BookingGroupingItem};
use crate::period::DateRange;

/// Builds one grouping per range, keeping each (project, allocation) pair once.
///
/// Items appear in the order their pair first occurs among the range's
/// bookings. Range order is preserved.
pub fn summarize(ranges: &[DateRange]) -> Vec<BookingGrouping> {
    ranges.iter().map(summarize_range).collect()
}

fn summarize_range(range: &DateRange) -> BookingGrouping {
    let mut seen = HashSet::new();
    let items = range
        .bookings
        .iter()
        .filter(|booking| seen.insert((&booking.project, booking.allocation)))
        .map(BookingGroupingItem::from)
        .collect();

    BookingGrouping {
        from: range.from,
        to: range.to,
        items,
    }
}
