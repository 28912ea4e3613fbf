//! Property-based tests for grouping and interleaving invariants using proptest.
//!
//! # Invariants tested:
//! - Ranges are ordered: `from <= to` for every grouping
//! - Dedup without loss: grouping items equal the distinct (project, allocation)
//!   pairs of the range's bookings, each exactly once
//! - Range count: `ceil(distinct dates / 2)`
//! - Interleave size law: `len(interleave(a, b)) == len(a) + len(b)`

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use bk_core::grouping::sort_ascending;
use bk_core::{
    AdjacentPair, Booking, DateOrder, GroupingOptions, Pairing, ProjectId, aggregate,
    aggregate_with, group_bookings, group_by_date, interleave, summarize,
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════

fn project_strategy() -> impl Strategy<Value = ProjectId> {
    prop_oneof![
        Just(ProjectId::new("HR").unwrap()),
        Just(ProjectId::new("CRM").unwrap()),
        Just(ProjectId::new("ECom").unwrap()),
    ]
}

fn booking_strategy() -> impl Strategy<Value = Booking> {
    (project_strategy(), 0u64..12, prop_oneof![Just(-5i64), Just(5), Just(10), Just(15)]).prop_map(
        |(project, offset, allocation)| {
            let base = NaiveDate::from_ymd_opt(2020, 2, 1).unwrap();
            Booking::new(project, base + Days::new(offset), allocation)
        },
    )
}

fn bookings_strategy() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec(booking_strategy(), 0..40)
}

fn sorted_bookings_strategy() -> impl Strategy<Value = Vec<Booking>> {
    bookings_strategy().prop_map(|mut bookings| {
        bookings.sort_by_key(|b| b.date);
        bookings
    })
}

fn pairing_strategy() -> impl Strategy<Value = Pairing> {
    prop_oneof![Just(Pairing::FirstTwo), Just(Pairing::Adjacent)]
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ascending_order_keeps_from_before_to(
        bookings in bookings_strategy(),
        pairing in pairing_strategy(),
    ) {
        let options = GroupingOptions { date_order: DateOrder::Ascending, pairing };
        let groupings = group_bookings(&bookings, &options).unwrap();

        for grouping in &groupings {
            prop_assert!(grouping.from <= grouping.to);
        }
    }

    #[test]
    fn sorted_input_is_accepted_in_first_occurrence_order(
        bookings in sorted_bookings_strategy(),
        pairing in pairing_strategy(),
    ) {
        let options = GroupingOptions { date_order: DateOrder::FirstOccurrence, pairing };
        prop_assert!(group_bookings(&bookings, &options).is_ok());
    }

    #[test]
    fn range_count_is_half_the_dates_rounded_up(bookings in bookings_strategy()) {
        let distinct: HashSet<NaiveDate> = bookings.iter().map(|b| b.date).collect();
        let groups = group_by_date(&bookings);

        prop_assert_eq!(groups.len(), distinct.len());
        prop_assert_eq!(aggregate(&groups).len(), distinct.len().div_ceil(2));
    }

    #[test]
    fn items_are_distinct_pairs_without_loss(bookings in sorted_bookings_strategy()) {
        let mut groups = group_by_date(&bookings);
        sort_ascending(&mut groups);

        for ranges in [aggregate(&groups), aggregate_with(&groups, &AdjacentPair)] {
            let groupings = summarize(&ranges);
            prop_assert_eq!(groupings.len(), ranges.len());

            for (range, grouping) in ranges.iter().zip(&groupings) {
                let expected: HashSet<(String, i64)> = range
                    .bookings
                    .iter()
                    .map(|b| (b.project.to_string(), b.allocation))
                    .collect();
                let actual: Vec<(String, i64)> = grouping
                    .items
                    .iter()
                    .map(|i| (i.project.to_string(), i.allocation))
                    .collect();
                let unique: HashSet<(String, i64)> = actual.iter().cloned().collect();

                prop_assert_eq!(actual.len(), unique.len());
                prop_assert_eq!(unique, expected);
            }
        }
    }

    #[test]
    fn interleave_length_is_sum_of_lengths(
        first in prop::collection::vec(any::<i32>(), 0..20),
        second in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let merged = interleave(&first, &second);
        prop_assert_eq!(merged.len(), first.len() + second.len());
    }

    #[test]
    fn interleave_places_second_after_matching_first(
        first in prop::collection::vec(any::<i32>(), 1..20),
        second in prop::collection::vec(any::<i32>(), 0..20),
    ) {
        let merged = interleave(&first, &second);
        let paired = first.len().min(second.len());

        for idx in 0..paired {
            prop_assert_eq!(merged[2 * idx], first[idx]);
            prop_assert_eq!(merged[2 * idx + 1], second[idx]);
        }
        if second.len() > first.len() {
            prop_assert_eq!(&merged[2 * first.len()..], &second[first.len()..]);
        } else {
            prop_assert_eq!(&merged[2 * paired..], &first[paired..]);
        }
    }
}
