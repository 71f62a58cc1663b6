//! Time unit vocabulary and time values.
//!
//! This registry covers the time units a declaration may carry (e.g. `100 msec`, `2 weeks`) and their accepted
//! spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - [`TimeUnit::None`] has no spelling; it marks a unitless magnitude (only meaningful for zero).
//! - This module is vocabulary only. How a unit is spelled in generated code is decided by each backend.
//!
//! ## Examples
//! ```rust
//! use lfgen_core::time::{self, TimeUnit};
//!
//! assert_eq!(time::from_str("msec"), Some(TimeUnit::Milli));
//! assert_eq!(time::from_str("weeks"), Some(TimeUnit::Week));
//! assert_eq!(time::as_str(TimeUnit::Second), "sec");
//! ```

use std::fmt;

/// Stable identifier for a time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Nano,
    Micro,
    Milli,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    /// Unitless magnitude.
    #[default]
    None,
}

/// Metadata for a time unit.
#[derive(Debug, Clone, Copy)]
pub struct TimeUnitInfo {
    pub id: TimeUnit,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of spelled time units.
pub const TIME_UNITS: &[TimeUnitInfo] = &[
    info(TimeUnit::Nano, "nsec", &["ns", "nsecs"], "Nanoseconds."),
    info(TimeUnit::Micro, "usec", &["us", "usecs"], "Microseconds."),
    info(TimeUnit::Milli, "msec", &["ms", "msecs"], "Milliseconds."),
    info(
        TimeUnit::Second,
        "sec",
        &["s", "secs", "second", "seconds"],
        "Seconds.",
    ),
    info(TimeUnit::Minute, "min", &["minute", "mins", "minutes"], "Minutes."),
    info(TimeUnit::Hour, "hour", &["h", "hours"], "Hours."),
    info(TimeUnit::Day, "day", &["d", "days"], "Days."),
    info(TimeUnit::Week, "week", &["weeks"], "Weeks (seven days)."),
];

/// Resolve a unit spelling to a [`TimeUnit`].
///
/// ## Returns
/// - `Some(TimeUnit)` if the spelling is a canonical name or alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<TimeUnit> {
    if let Some(u) = TIME_UNITS.iter().find(|u| u.canonical == name) {
        return Some(u.id);
    }
    TIME_UNITS
        .iter()
        .find(|u| {
            let aliases: &[&str] = u.aliases;
            aliases.contains(&name)
        })
        .map(|u| u.id)
}

/// Return the canonical spelling for a time unit (empty for [`TimeUnit::None`]).
pub fn as_str(id: TimeUnit) -> &'static str {
    TIME_UNITS
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.canonical)
        .unwrap_or("")
}

const fn info(
    id: TimeUnit,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> TimeUnitInfo {
    TimeUnitInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

/// A magnitude paired with a time unit, e.g. `100 msec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeValue {
    pub magnitude: i64,
    pub unit: TimeUnit,
}

impl TimeValue {
    /// The zero duration.
    pub const ZERO: TimeValue = TimeValue {
        magnitude: 0,
        unit: TimeUnit::None,
    };

    pub fn new(magnitude: i64, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeUnit::None => write!(f, "{}", self.magnitude),
            unit => write!(f, "{} {}", self.magnitude, as_str(unit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_spellings_resolve() {
        for u in TIME_UNITS {
            assert_eq!(from_str(u.canonical), Some(u.id), "canonical {}", u.canonical);
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(from_str("ms"), Some(TimeUnit::Milli));
        assert_eq!(from_str("seconds"), Some(TimeUnit::Second));
        assert_eq!(from_str("minutes"), Some(TimeUnit::Minute));
        assert_eq!(from_str("d"), Some(TimeUnit::Day));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("MSEC"), None);
        assert_eq!(from_str("Week"), None);
    }

    #[test]
    fn no_spelling_is_shared_between_units() {
        let mut seen = std::collections::HashSet::new();
        for u in TIME_UNITS {
            assert!(seen.insert(u.canonical), "duplicate spelling {}", u.canonical);
            for a in u.aliases {
                assert!(seen.insert(*a), "duplicate spelling {}", a);
            }
        }
    }

    #[test]
    fn none_has_no_spelling() {
        assert_eq!(as_str(TimeUnit::None), "");
    }

    #[test]
    fn display_uses_canonical_unit() {
        assert_eq!(TimeValue::new(100, TimeUnit::Milli).to_string(), "100 msec");
        assert_eq!(TimeValue::new(3, TimeUnit::None).to_string(), "3");
    }

    #[test]
    fn zero_ignores_unit() {
        assert!(TimeValue::new(0, TimeUnit::Week).is_zero());
        assert!(TimeValue::ZERO.is_zero());
        assert!(!TimeValue::new(1, TimeUnit::None).is_zero());
    }
}
