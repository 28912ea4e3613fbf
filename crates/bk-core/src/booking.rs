//! Bookings and the groupings built from them.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ProjectId, ValidationError};

/// One project's allocation on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    /// The booked project.
    pub project: ProjectId,

    /// The booked date. Time-of-day is dropped on input.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,

    /// The allocated amount.
    pub allocation: i64,
}

impl Booking {
    pub const fn new(project: ProjectId, date: NaiveDate, allocation: i64) -> Self {
        Self {
            project,
            date,
            allocation,
        }
    }
}

/// A distinct (project, allocation) pair inside a grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingGroupingItem {
    pub project: ProjectId,
    pub allocation: i64,
}

impl From<&Booking> for BookingGroupingItem {
    fn from(booking: &Booking) -> Self {
        Self {
            project: booking.project.clone(),
            allocation: booking.allocation,
        }
    }
}

/// The distinct project allocations reported for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingGrouping {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub items: Vec<BookingGroupingItem>,
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_booking_date(&raw).map_err(serde::de::Error::custom)
}

/// Parses a booking date from either a plain date or a full timestamp.
///
/// Timestamps keep the date as written in their own offset, so
/// `2020-02-01T23:30:00-05:00` is the 1st, not the 2nd.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::InvalidDate {
            value: raw.to_string(),
        })
}
