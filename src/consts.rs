/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Month number for January, the lower bound of an unconstrained month wheel
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December, the upper bound of an unconstrained month wheel
pub const DECEMBER: u8 = 12;

/// First day of month, the lower bound of an unconstrained day wheel
pub const FIRST_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month in a common year, indexed by month number (index 0 is unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of wheels in a date picker (year, month, day)
pub const WHEEL_COUNT: usize = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Component separator for the month-first and day-first formats
pub const SLASH_SEPARATOR: char = '/';
/// Separator between the minimum and maximum date of a `BoundedDate`
pub const RANGE_SEPARATOR: char = '/';
