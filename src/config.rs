use log::debug;
use serde::{Deserialize, Serialize};

use crate::{BoundedDate, CalendarDate, DateFormat, DateRangeResolver, OutOfRangePolicy};

/// Picker settings as they appear in an application's configuration file.
///
/// ```json
/// {
///   "bounds": "2000-01-01/2030-12-31",
///   "initial": "2024-01-31",
///   "format": "month_first",
///   "out_of_range": "clamp"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    pub bounds:       BoundedDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial:      Option<CalendarDate>,
    #[serde(default)]
    pub format:       DateFormat,
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
}

impl PickerConfig {
    pub const fn new(bounds: BoundedDate) -> Self {
        Self {
            bounds,
            initial: None,
            format: DateFormat::Iso,
            out_of_range: OutOfRangePolicy::Ignore,
        }
    }

    /// Builds a resolver and applies `initial` under the configured policy.
    ///
    /// An initial date the policy rejects leaves the selection on the minimum bound.
    pub fn build_resolver(&self) -> DateRangeResolver {
        let mut resolver = DateRangeResolver::from_bounds(self.bounds).with_policy(self.out_of_range);
        if let Some(initial) = self.initial {
            if resolver.set_date(initial).is_none() {
                debug!("Initial date {initial} rejected, starting at {}", self.bounds.min());
            }
        }
        resolver
    }
}

impl From<BoundedDate> for PickerConfig {
    fn from(bounds: BoundedDate) -> Self {
        Self::new(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bounds, date};

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "bounds": "2000-01-01/2030-12-31",
            "initial": "2024-01-31",
            "format": "month_first",
            "out_of_range": "clamp"
        }"#;
        let config: PickerConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.bounds, bounds((2000, 1, 1), (2030, 12, 31)));
        assert_eq!(config.initial, Some(date(2024, 1, 31)));
        assert_eq!(config.format, DateFormat::MonthFirst);
        assert_eq!(config.out_of_range, OutOfRangePolicy::Clamp);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: PickerConfig =
            serde_json::from_str(r#"{ "bounds": "2000-01-01/2010-01-01" }"#).unwrap();
        assert_eq!(config, PickerConfig::new(bounds((2000, 1, 1), (2010, 1, 1))));
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        // min after max
        assert!(serde_json::from_str::<PickerConfig>(r#"{ "bounds": "2010-01-01/2000-01-01" }"#).is_err());
        // unknown key
        assert!(
            serde_json::from_str::<PickerConfig>(r#"{ "bounds": "2000-01-01/2010-01-01", "locale": "fr" }"#)
                .is_err()
        );
        // unknown policy
        assert!(
            serde_json::from_str::<PickerConfig>(
                r#"{ "bounds": "2000-01-01/2010-01-01", "out_of_range": "wrap" }"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_build_resolver_applies_initial() {
        let mut config = PickerConfig::from(bounds((2000, 1, 1), (2010, 1, 1)));
        config.initial = Some(date(2005, 7, 9));

        let resolver = config.build_resolver();
        assert_eq!(resolver.selected(), date(2005, 7, 9));
        assert_eq!(resolver.policy(), OutOfRangePolicy::Ignore);
    }

    #[test]
    fn test_build_resolver_out_of_range_initial() {
        let mut config = PickerConfig::from(bounds((2000, 1, 1), (2010, 1, 1)));
        config.initial = Some(date(2011, 5, 1));
        assert_eq!(config.build_resolver().selected(), date(2000, 1, 1));

        config.out_of_range = OutOfRangePolicy::Clamp;
        assert_eq!(config.build_resolver().selected(), date(2010, 1, 1));
    }

    #[test]
    fn test_serialize_skips_missing_initial() {
        let config = PickerConfig::new(bounds((2000, 1, 1), (2010, 1, 1)));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"bounds":"2000-01-01/2010-01-01","format":"iso","out_of_range":"ignore"}"#
        );
    }
}
