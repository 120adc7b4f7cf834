use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// The inclusive `[min, max]` pair that constrains every selection of a picker.
/// `min` is never after `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct BoundedDate {
    min: CalendarDate,
    max: CalendarDate,
}

/// Error type for bounded date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum date is after maximum date.
    #[error("Invalid date range: min ({min}) is after max ({max})")]
    InvalidRange { min: CalendarDate, max: CalendarDate },

    /// Error parsing one of the endpoints.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl BoundedDate {
    /// Creates a bounded range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `min > max`.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    /// Checks whether `date` lies within the range, endpoints included.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.min <= *date && *date <= self.max
    }

    /// Returns `date`, or the nearest endpoint if it lies outside the range.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        date.clamp(self.min, self.max)
    }

    /// Returns `true` when the range covers exactly one day.
    pub fn is_single_day(&self) -> bool {
        self.min == self.max
    }
}

impl FromStr for BoundedDate {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((min, max)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if max.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: {s}"
            )));
        }

        Self::new(min.trim().parse()?, max.trim().parse()?)
    }
}

impl Serialize for BoundedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BoundedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
