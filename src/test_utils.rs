//! Shared constructors for unit tests.

#![allow(clippy::unwrap_used)]

use crate::{BoundedDate, CalendarDate, DateRangeResolver};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

pub fn bounds(min: (u16, u8, u8), max: (u16, u8, u8)) -> BoundedDate {
    BoundedDate::new(date(min.0, min.1, min.2), date(max.0, max.1, max.2)).unwrap()
}

pub fn resolver(min: (u16, u8, u8), max: (u16, u8, u8)) -> DateRangeResolver {
    DateRangeResolver::from_bounds(bounds(min, max))
}
