use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    BoundedDate, CalendarDate, DECEMBER, DateFormat, FIRST_DAY, JANUARY, RangeError, Rows,
    Wheel, WheelBounds, WheelError, days_in_month,
};

/// What [`DateRangeResolver::set_date`] does with a date outside the bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Leave the selection untouched and report no row update.
    #[default]
    Ignore,
    /// Select the nearest bound instead.
    Clamp,
}

/// Read-only row queries a selector widget needs to lay out its wheels.
pub trait WheelSource {
    /// Number of rows `wheel` currently offers, always at least 1.
    fn row_count(&self, wheel: Wheel) -> usize;

    /// Calendar value shown at `row` of `wheel`.
    ///
    /// # Errors
    /// Returns `WheelError::RowOutOfRange` if `row >= self.row_count(wheel)`.
    fn value(&self, wheel: Wheel, row: usize) -> Result<u16, WheelError>;
}

/// Maps between wheel rows and calendar values for a bounded date selection.
///
/// The selection is always a valid date inside the bounds. Row 0 of every wheel is the
/// smallest value that wheel currently offers: the month wheel narrows in the first and
/// last year of the bounds, and the day wheel narrows in the first and last month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeResolver {
    bounds:   BoundedDate,
    selected: CalendarDate,
    policy:   OutOfRangePolicy,
}

impl DateRangeResolver {
    /// Creates a resolver selecting `min`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `min > max`.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, RangeError> {
        Ok(Self::from_bounds(BoundedDate::new(min, max)?))
    }

    /// Creates a resolver over validated bounds, selecting the minimum.
    pub const fn from_bounds(bounds: BoundedDate) -> Self {
        Self {
            bounds,
            selected: bounds.min(),
            policy: OutOfRangePolicy::Ignore,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn bounds(&self) -> BoundedDate {
        self.bounds
    }

    pub const fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// The current selection.
    pub const fn selected(&self) -> CalendarDate {
        self.selected
    }

    /// Values `wheel` offers under the current selection.
    pub fn wheel_bounds(&self, wheel: Wheel) -> WheelBounds {
        let (year, month, _) = self.selected.to_tuple();
        match wheel {
            Wheel::Year => WheelBounds::new(self.bounds.min().year(), self.bounds.max().year()),
            Wheel::Month => self.month_bounds(year),
            Wheel::Day => self.day_bounds(year, month),
        }
    }

    pub fn row_count(&self, wheel: Wheel) -> usize {
        self.wheel_bounds(wheel).len()
    }

    /// Calendar value shown at `row` of `wheel`.
    ///
    /// # Errors
    /// Returns `WheelError::RowOutOfRange` if `row` is past the wheel's last row.
    pub fn value(&self, wheel: Wheel, row: usize) -> Result<u16, WheelError> {
        let bounds = self.wheel_bounds(wheel);
        let value = bounds.value_at(row).ok_or(WheelError::RowOutOfRange {
            wheel,
            row,
            rows: bounds.len(),
        })?;
        trace!("{wheel} row {row} -> {value}");
        Ok(value)
    }

    /// Rows of the current selection.
    pub fn rows(&self) -> Rows {
        Rows {
            year:  self.row_of(Wheel::Year),
            month: self.row_of(Wheel::Month),
            day:   self.row_of(Wheel::Day),
        }
    }

    /// Selects `date` and returns the rows the widget should scroll to.
    ///
    /// A date outside the bounds is handled by the resolver's [`OutOfRangePolicy`]:
    /// with `Ignore` nothing changes and `None` is returned.
    pub fn set_date(&mut self, date: CalendarDate) -> Option<Rows> {
        let target = if self.bounds.contains(&date) {
            date
        } else {
            match self.policy {
                OutOfRangePolicy::Ignore => {
                    debug!("Ignoring {date}: outside {}", self.bounds);
                    return None;
                }
                OutOfRangePolicy::Clamp => {
                    let clamped = self.bounds.clamp(date);
                    debug!("Clamping {date} to {clamped}");
                    clamped
                }
            }
        };

        self.selected = target;
        Some(self.rows())
    }

    /// Parses `text` with `format` and selects the result.
    ///
    /// Unparsable text is ignored like an out-of-range date.
    pub fn set_date_str(&mut self, text: &str, format: DateFormat) -> Option<Rows> {
        match format.parse(text) {
            Ok(date) => self.set_date(date),
            Err(err) => {
                debug!("Ignoring {text:?} ({format}): {err}");
                None
            }
        }
    }

    /// Applies a wheel the user settled on `row`.
    ///
    /// Changing the year or month re-validates the wheels to its right: a year change
    /// pulls the month into the new year's range, then the day is pulled into the
    /// resulting month's range. Returns the day row for year and month changes, `None`
    /// for the day wheel.
    ///
    /// # Errors
    /// Returns `WheelError::RowOutOfRange` if `row` is outside the wheel's current bounds.
    pub fn selection_changed(&mut self, wheel: Wheel, row: usize) -> Result<Option<usize>, WheelError> {
        let value = self.value(wheel, row)?;
        let (mut year, mut month, day) = self.selected.to_tuple();

        match wheel {
            Wheel::Day => {
                self.selected = CalendarDate::from_parts(year, month, narrow(value));
                return Ok(None);
            }
            Wheel::Month => month = narrow(value),
            Wheel::Year => {
                year = value;
                let clamped = narrow(self.month_bounds(year).clamp(month.into()));
                if clamped != month {
                    debug!("Month {month} outside year {year}, moving to {clamped}");
                }
                month = clamped;
            }
        }

        let clamped = narrow(self.day_bounds(year, month).clamp(day.into()));
        if clamped != day {
            debug!("Day {day} outside {year}-{month:02}, moving to {clamped}");
        }
        self.selected = CalendarDate::from_parts(year, month, clamped);

        Ok(Some(self.row_of(Wheel::Day)))
    }

    fn month_bounds(&self, year: u16) -> WheelBounds {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let lower = if year == min.year() { min.month() } else { JANUARY };
        let upper = if year == max.year() { max.month() } else { DECEMBER };
        WheelBounds::new(lower.into(), upper.into())
    }

    fn day_bounds(&self, year: u16, month: u8) -> WheelBounds {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let lower = if (year, month) == (min.year(), min.month()) {
            min.day()
        } else {
            FIRST_DAY
        };
        let upper = if (year, month) == (max.year(), max.month()) {
            max.day()
        } else {
            days_in_month(year, month)
        };
        WheelBounds::new(lower.into(), upper.into())
    }

    fn row_of(&self, wheel: Wheel) -> usize {
        let (year, month, day) = self.selected.to_tuple();
        let value = match wheel {
            Wheel::Year => year,
            Wheel::Month => month.into(),
            Wheel::Day => day.into(),
        };
        let row = self.wheel_bounds(wheel).row_of(value);
        debug_assert!(row.is_some(), "selection {} outside {wheel} wheel", self.selected);
        row.unwrap_or_default()
    }
}

impl WheelSource for DateRangeResolver {
    fn row_count(&self, wheel: Wheel) -> usize {
        Self::row_count(self, wheel)
    }

    fn value(&self, wheel: Wheel, row: usize) -> Result<u16, WheelError> {
        Self::value(self, wheel, row)
    }
}

/// Month and day wheel values never exceed 31.
fn narrow(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
