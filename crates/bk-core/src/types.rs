//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A date that is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("invalid booking date: {value} (expected YYYY-MM-DD or RFC 3339 timestamp)")]
    InvalidDate { value: String },

    /// Unknown pairing policy name.
    #[error("invalid pairing policy: {value} (expected first-two or adjacent)")]
    InvalidPairing { value: String },

    /// Unknown date order name.
    #[error("invalid date order: {value} (expected first-occurrence or ascending)")]
    InvalidDateOrder { value: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated project identifier.
    ///
    /// Project IDs are non-empty strings such as `HR` or `CRM`. Equality is
    /// exact and case-sensitive.
    ProjectId, "project"
);

/// How the bookings of two paired dates are merged.
///
/// `FirstTwo` (the default) makes every pair merge the
/// bookings of the first two dates in the list. `Adjacent` merges the pair's
/// own bookings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pairing {
    #[default]
    FirstTwo,
    Adjacent,
}

impl Pairing {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTwo => "first-two",
            Self::Adjacent => "adjacent",
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Pairing {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-two" => Ok(Self::FirstTwo),
            "adjacent" => Ok(Self::Adjacent),
            _ => Err(ValidationError::InvalidPairing {
                value: s.to_string(),
            }),
        }
    }
}

/// How distinct dates are ordered before pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Keep first-occurrence order; input must already be date-sorted.
    #[default]
    FirstOccurrence,
    /// Sort distinct dates ascending.
    Ascending,
}

impl DateOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstOccurrence => "first-occurrence",
            Self::Ascending => "ascending",
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DateOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-occurrence" => Ok(Self::FirstOccurrence),
            "ascending" => Ok(Self::Ascending),
            _ => Err(ValidationError::InvalidDateOrder {
                value: s.to_string(),
            }),
        }
    }
}
