//! Partitioning bookings by calendar date.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::Booking;

/// All bookings that share one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}

/// Errors raised while grouping bookings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupingError {
    /// Distinct dates were not in ascending order.
    #[error("bookings are not sorted by date: {next} appears after {previous}")]
    UnsortedDates {
        previous: NaiveDate,
        next: NaiveDate,
    },
}

/// Partitions bookings by exact date.
///
/// Distinct dates keep the order in which they first appear, and bookings keep
/// their relative input order inside each group.
pub fn group_by_date(bookings: &[Booking]) -> Vec<DateGroup> {
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<DateGroup> = Vec::new();

    for booking in bookings {
        let idx = *index_by_date.entry(booking.date).or_insert_with(|| {
            groups.push(DateGroup {
                date: booking.date,
                bookings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].bookings.push(booking.clone());
    }

    groups
}

/// Sorts groups by date, ascending.
///
/// Dates are distinct after [`group_by_date`], so an unstable sort is enough.
pub fn sort_ascending(groups: &mut [DateGroup]) {
    groups.sort_unstable_by_key(|group| group.date);
}

/// Checks that group dates are strictly ascending.
pub fn ensure_ascending(groups: &[DateGroup]) -> Result<(), GroupingError> {
    groups.windows(2).try_for_each(|pair| {
        if pair[0].date < pair[1].date {
            Ok(())
        } else {
            Err(GroupingError::UnsortedDates {
                previous: pair[0].date,
                next: pair[1].date,
            })
        }
    })
}
