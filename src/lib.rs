//! Row/date mapping for three-wheel (year, month, day) date pickers.
//!
//! A [`DateRangeResolver`] owns a [`BoundedDate`] and the current selection, and
//! translates between wheel rows and calendar values. A [`DatePicker`] couples a
//! resolver with any [`SelectorWidget`] implementation.

mod bounds;
mod calendar;
mod config;
mod consts;
mod format;
mod picker;
mod prelude;
mod resolver;
mod wheel;

#[cfg(test)]
mod test_utils;

pub use bounds::{BoundedDate, RangeError};
pub use calendar::{days_in_month, is_leap_year};
pub use config::PickerConfig;
pub use consts::*;
pub use format::DateFormat;
pub use picker::{DatePicker, SelectorWidget};
pub use resolver::{DateRangeResolver, OutOfRangePolicy, WheelSource};
pub use wheel::{Rows, Wheel, WheelBounds, WheelError};

use crate::prelude::*;
use std::str::FromStr;

/// A whole-day date in the proleptic Gregorian calendar.
///
/// Every component is validated on construction, so a `CalendarDate` always names a
/// day that exists. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", JANUARY, DECEMBER)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, validating each component.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for the first
    /// component that is out of range.
    pub const fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month < JANUARY || month > DECEMBER {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < FIRST_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components the caller has already bounded.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(month >= JANUARY && month <= DECEMBER);
        debug_assert!(day >= FIRST_DAY && day <= days_in_month(year, month));
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the date as a `(year, month, day)` tuple.
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Parses a purely numeric date component.
    ///
    /// Signs and whitespace inside the component are rejected, unlike `str::parse`.
    pub(crate) fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}

/// Parses `YYYY-MM-DD`. Other layouts go through [`DateFormat`].
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        let d = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
        assert_eq!(d.to_tuple(), (2024, 2, 29));
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 1, 1),
            Err(ParseError::InvalidYear(10000))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            CalendarDate::new(2024, 4, 0),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("2007-08-20".parse::<CalendarDate>().unwrap(), date(2007, 8, 20));
        assert_eq!(" 2007-11-09 ".parse::<CalendarDate>().unwrap(), date(2007, 11, 9));
        assert_eq!("2007-1-9".parse::<CalendarDate>().unwrap(), date(2007, 1, 9));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2007-08".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2007-08-20-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2007-+8-20".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "08/20/2007".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2021-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_display_pads_components() {
        assert_eq!(date(7, 3, 4).to_string(), "0007-03-04");
        assert_eq!(date(2024, 12, 31).to_string(), "2024-12-31");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
    }

    #[test]
    fn test_tuple_conversions() {
        let d: CalendarDate = (2020, 6, 15).try_into().unwrap();
        assert_eq!(d, date(2020, 6, 15));
        let t: (u16, u8, u8) = d.into();
        assert_eq!(t, (2020, 6, 15));
        assert!(CalendarDate::try_from((2020, 6, 31)).is_err());
    }

    #[test]
    fn test_serde() {
        let d = date(2020, 6, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2020-06-15\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>("\"2020-06-31\"").is_err());
    }
}
