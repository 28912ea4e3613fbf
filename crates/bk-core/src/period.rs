//! Pairing date groups into date ranges.
//!
//! Groups are consumed two at a time in list order. Each pair becomes one
//! [`DateRange`] spanning the two dates; a trailing unpaired group becomes a
//! single-date range holding only its own bookings.
//!
//! Which bookings a pair carries is decided by a [`PairingPolicy`]:
//!
//! - [`FirstTwoGroups`]: every pair carries the bookings of the first two
//!   groups in the whole list. This is the default and what
//!   [`aggregate`] uses.
//! - [`AdjacentPair`]: each pair carries its own two groups' bookings.

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::grouping::DateGroup;
use crate::types::Pairing;

/// A span of one or two dates with the bookings merged for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub bookings: Vec<Booking>,
}

/// Chooses the bookings merged into a paired range.
pub trait PairingPolicy {
    /// Returns the bookings for the pair `(groups[first], groups[first + 1])`.
    ///
    /// Callers guarantee `first + 1 < groups.len()`.
    fn merge(&self, groups: &[DateGroup], first: usize) -> Vec<Booking>;
}

/// Merges the bookings of `groups[0]` and `groups[1]` for every pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTwoGroups;

impl PairingPolicy for FirstTwoGroups {
    fn merge(&self, groups: &[DateGroup], _first: usize) -> Vec<Booking> {
        concat(&groups[0], &groups[1])
    }
}

/// Merges the bookings of the pair itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentPair;

impl PairingPolicy for AdjacentPair {
    fn merge(&self, groups: &[DateGroup], first: usize) -> Vec<Booking> {
        concat(&groups[first], &groups[first + 1])
    }
}

impl Pairing {
    /// Returns the policy implementing this pairing.
    pub fn policy(self) -> &'static dyn PairingPolicy {
        match self {
            Self::FirstTwo => &FirstTwoGroups,
            Self::Adjacent => &AdjacentPair,
        }
    }
}

fn concat(a: &DateGroup, b: &DateGroup) -> Vec<Booking> {
    let mut bookings = Vec::with_capacity(a.bookings.len() + b.bookings.len());
    bookings.extend_from_slice(&a.bookings);
    bookings.extend_from_slice(&b.bookings);
    bookings
}

/// Pairs groups into ranges using the default [`FirstTwoGroups`] policy.
pub fn aggregate(groups: &[DateGroup]) -> Vec<DateRange> {
    aggregate_with(groups, &FirstTwoGroups)
}

/// Pairs groups into ranges, letting `policy` pick each pair's bookings.
pub fn aggregate_with<P: PairingPolicy + ?Sized>(
    groups: &[DateGroup],
    policy: &P,
) -> Vec<DateRange> {
    let mut ranges = Vec::with_capacity(groups.len().div_ceil(2));

    for (chunk_idx, chunk) in groups.chunks(2).enumerate() {
        if let [from, to] = chunk {
            ranges.push(DateRange {
                from: from.date,
                to: to.date,
                bookings: policy.merge(groups, chunk_idx * 2),
            });
        } else if let [single] = chunk {
            ranges.push(DateRange {
                from: single.date,
                to: single.date,
                bookings: single.bookings.clone(),
            });
        }
    }

    ranges
}
