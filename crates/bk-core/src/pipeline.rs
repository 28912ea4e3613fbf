//! End-to-end grouping of bookings into date-range groupings.
//!
//! # Steps
//!
//! 1. Partition bookings by date ([`group_by_date`])
//! 2. Order the date groups according to [`DateOrder`]
//! 3. Pair groups into ranges ([`aggregate_with`])
//! 4. Collapse each range into distinct project allocations ([`summarize`])

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingGrouping};
use crate::grouping::{GroupingError, ensure_ascending, group_by_date, sort_ascending};
use crate::period::aggregate_with;
use crate::summary::summarize;
use crate::types::{DateOrder, Pairing};

/// Options for [`group_bookings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingOptions {
    /// How distinct dates are ordered before pairing.
    #[serde(default)]
    pub date_order: DateOrder,

    /// Which bookings a pair of dates merges.
    #[serde(default)]
    pub pairing: Pairing,
}

/// Groups bookings into date ranges with their distinct project allocations.
///
/// With [`DateOrder::FirstOccurrence`] the input must already be sorted by
/// date; otherwise [`GroupingError::UnsortedDates`] is returned before any
/// pairing happens. Empty input yields an empty result.
pub fn group_bookings(
    bookings: &[Booking],
    options: &GroupingOptions,
) -> Result<Vec<BookingGrouping>, GroupingError> {
    let mut groups = group_by_date(bookings);
    tracing::debug!(
        bookings = bookings.len(),
        dates = groups.len(),
        "grouped bookings by date"
    );

    match options.date_order {
        DateOrder::FirstOccurrence => ensure_ascending(&groups)?,
        DateOrder::Ascending => sort_ascending(&mut groups),
    }

    let ranges = aggregate_with(&groups, options.pairing.policy());
    let groupings = summarize(&ranges);
    tracing::debug!(
        ranges = groupings.len(),
        pairing = %options.pairing,
        "summarized date ranges"
    );

    Ok(groupings)
}
