use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DATE_SEPARATOR, ParseError, SLASH_SEPARATOR, prelude::*};

/// Layout of a date string accepted by [`DateFormat::parse`].
///
/// Passed explicitly wherever text is turned into a date, so there is no process-wide
/// default formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    #[display(fmt = "YYYY-MM-DD")]
    Iso,
    /// `MM/DD/YYYY`
    #[display(fmt = "MM/DD/YYYY")]
    MonthFirst,
    /// `DD/MM/YYYY`
    #[display(fmt = "DD/MM/YYYY")]
    DayFirst,
}

impl DateFormat {
    /// Parses `s` according to this layout.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input, `InvalidFormat` when the text does
    /// not match the layout, and the component errors of [`CalendarDate::new`] otherwise.
    pub fn parse(self, s: &str) -> Result<CalendarDate, ParseError> {
        match self {
            Self::Iso => s.parse(),
            Self::MonthFirst => Self::parse_slashed(s, |[m, d, y]| (y, m, d)),
            Self::DayFirst => Self::parse_slashed(s, |[d, m, y]| (y, m, d)),
        }
    }

    /// Renders `date` in this layout, zero-padded.
    pub fn format(self, date: CalendarDate) -> String {
        let (year, month, day) = date.to_tuple();
        match self {
            Self::Iso => date.to_string(),
            Self::MonthFirst => format!("{month:02}{SLASH_SEPARATOR}{day:02}{SLASH_SEPARATOR}{year:04}"),
            Self::DayFirst => format!("{day:02}{SLASH_SEPARATOR}{month:02}{SLASH_SEPARATOR}{year:04}"),
        }
    }

    fn parse_slashed<'a>(
        s: &'a str,
        order: impl FnOnce([&'a str; 3]) -> (&'a str, &'a str, &'a str),
    ) -> Result<CalendarDate, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.contains(DATE_SEPARATOR) {
            return Err(ParseError::InvalidFormat(format!(
                "Unexpected '{DATE_SEPARATOR}' in {trimmed}"
            )));
        }

        let parts: Vec<&str> = trimmed.split(SLASH_SEPARATOR).map(str::trim).collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 '{SLASH_SEPARATOR}'-separated components, got {trimmed}"
            )));
        };

        let (year, month, day) = order([*a, *b, *c]);
        CalendarDate::new(
            CalendarDate::parse_component(year)?,
            CalendarDate::parse_component(month)?,
            CalendarDate::parse_component(day)?,
        )
    }
}
