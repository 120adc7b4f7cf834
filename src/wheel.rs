use serde::{Deserialize, Serialize};

use crate::{WHEEL_COUNT, prelude::*};

/// One of the three scrollable value lists of a date picker.
///
/// The discriminant is the widget component index: year is the leftmost wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wheel {
    #[display(fmt = "year")]
    Year = 0,
    #[display(fmt = "month")]
    Month = 1,
    #[display(fmt = "day")]
    Day = 2,
}

/// Error type for row lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    /// A row was queried outside the wheel's current bounds. The widget and the
    /// resolver have fallen out of sync.
    #[error("Row {row} is out of range for the {wheel} wheel ({rows} rows)")]
    RowOutOfRange { wheel: Wheel, row: usize, rows: usize },

    /// A component index that names no wheel.
    #[error("Unknown wheel component {0} (expected 0-{max})", max = WHEEL_COUNT - 1)]
    UnknownComponent(usize),
}

impl Wheel {
    /// All wheels in component order.
    pub const ALL: [Self; WHEEL_COUNT] = [Self::Year, Self::Month, Self::Day];

    /// Widget component index of this wheel.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Wheel {
    type Error = WheelError;

    fn try_from(component: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(component)
            .copied()
            .ok_or(WheelError::UnknownComponent(component))
    }
}

/// Inclusive `[lower, upper]` range of the values a wheel currently offers.
///
/// Row `n` of the wheel shows `lower + n`. The range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{lower}..={upper}")]
pub struct WheelBounds {
    lower: u16,
    upper: u16,
}

impl WheelBounds {
    pub(crate) const fn new(lower: u16, upper: u16) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    pub const fn lower(&self) -> u16 {
        self.lower
    }

    pub const fn upper(&self) -> u16 {
        self.upper
    }

    /// Number of rows, always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        (self.upper - self.lower) as usize + 1
    }

    pub const fn contains(&self, value: u16) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Value shown at `row`, or `None` past the last row.
    pub fn value_at(&self, row: usize) -> Option<u16> {
        let offset = u16::try_from(row).ok()?;
        self.lower
            .checked_add(offset)
            .filter(|value| *value <= self.upper)
    }

    /// Row that shows `value`, or `None` if the value is not offered.
    pub fn row_of(&self, value: u16) -> Option<usize> {
        self.contains(value)
            .then(|| usize::from(value - self.lower))
    }

    /// Returns `value` pulled onto the nearest endpoint.
    pub fn clamp(&self, value: u16) -> u16 {
        value.clamp(self.lower, self.upper)
    }
}

/// Row positions of the three wheels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rows {
    pub year:  usize,
    pub month: usize,
    pub day:   usize,
}

impl Rows {
    pub const fn get(&self, wheel: Wheel) -> usize {
        match wheel {
            Wheel::Year => self.year,
            Wheel::Month => self.month,
            Wheel::Day => self.day,
        }
    }

    /// Iterates `(wheel, row)` pairs in component order.
    pub fn iter(&self) -> impl Iterator<Item = (Wheel, usize)> {
        let rows = *self;
        Wheel::ALL.into_iter().map(move |wheel| (wheel, rows.get(wheel)))
    }
}
