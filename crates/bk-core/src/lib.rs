//! Core domain logic for booking grouping.
//!
//! This crate contains the fundamental types and logic for:
//! - Grouping: partitioning bookings by date and pairing dates into ranges
//! - Summaries: collapsing ranges into distinct project allocations
//! - Interleaving: positional merge of two sequences
//! - Helpers: stats over possibly empty input, hierarchical names, paged fetch

mod booking;
pub mod grouping;
pub mod hierarchy;
mod interleave;
pub mod paging;
pub mod period;
mod pipeline;
pub mod stats;
mod summary;
pub mod types;

pub use booking::{Booking, BookingGrouping, BookingGroupingItem, parse_booking_date};
pub use grouping::{DateGroup, GroupingError, group_by_date};
pub use interleave::interleave;
pub use period::{
    AdjacentPair, DateRange, FirstTwoGroups, PairingPolicy, aggregate, aggregate_with,
};
pub use pipeline::{GroupingOptions, group_bookings};
pub use summary::summarize;
pub use types::{DateOrder, Pairing, ProjectId, ValidationError};
