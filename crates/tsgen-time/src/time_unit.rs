//! `TimeUnit`: the unit a step [`Period`](crate::Period) is counted in.

/// A unit of time used as the step of a calendar range.
///
/// Sub-daily units, days and weeks are fixed-length. Month and year units
/// are *anchored*: a range stepping by them lands on the first or last day
/// of the month (or year) rather than on the start timestamp plus a fixed
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Microseconds.
    Microseconds,
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// First day of each month.
    MonthStart,
    /// Last day of each month.
    MonthEnd,
    /// January 1st of each year.
    YearStart,
    /// December 31st of each year.
    YearEnd,
}

impl TimeUnit {
    /// Whether the unit snaps to a calendar boundary instead of adding a
    /// fixed duration.
    pub fn is_anchored(&self) -> bool {
        matches!(
            self,
            TimeUnit::MonthStart | TimeUnit::MonthEnd | TimeUnit::YearStart | TimeUnit::YearEnd
        )
    }

    /// Length of one unit in microseconds, or `None` for anchored units.
    pub fn fixed_micros(&self) -> Option<i64> {
        const SECOND: i64 = 1_000_000;
        match self {
            TimeUnit::Microseconds => Some(1),
            TimeUnit::Milliseconds => Some(1_000),
            TimeUnit::Seconds => Some(SECOND),
            TimeUnit::Minutes => Some(60 * SECOND),
            TimeUnit::Hours => Some(3_600 * SECOND),
            TimeUnit::Days => Some(86_400 * SECOND),
            TimeUnit::Weeks => Some(7 * 86_400 * SECOND),
            _ => None,
        }
    }

    /// Canonical abbreviation, as accepted by `Period::from_str`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::MonthStart => "MS",
            TimeUnit::MonthEnd => "M",
            TimeUnit::YearStart => "YS",
            TimeUnit::YearEnd => "Y",
        }
    }

    /// Resolve a unit alias (`"D"`, `"M"`, `"min"`, `"T"`, ...).
    pub fn from_alias(alias: &str) -> Option<Self> {
        let unit = match alias {
            "us" | "U" => TimeUnit::Microseconds,
            "ms" | "L" => TimeUnit::Milliseconds,
            "s" | "S" => TimeUnit::Seconds,
            "min" | "T" => TimeUnit::Minutes,
            "h" | "H" => TimeUnit::Hours,
            "D" | "d" => TimeUnit::Days,
            "W" | "w" => TimeUnit::Weeks,
            "MS" => TimeUnit::MonthStart,
            "M" | "ME" => TimeUnit::MonthEnd,
            "YS" | "AS" => TimeUnit::YearStart,
            "Y" | "A" | "YE" => TimeUnit::YearEnd,
            _ => return None,
        };
        Some(unit)
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Microseconds => write!(f, "Microsecond(s)"),
            TimeUnit::Milliseconds => write!(f, "Millisecond(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::MonthStart => write!(f, "Month start(s)"),
            TimeUnit::MonthEnd => write!(f, "Month end(s)"),
            TimeUnit::YearStart => write!(f, "Year start(s)"),
            TimeUnit::YearEnd => write!(f, "Year end(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical_unit() {
        assert_eq!(TimeUnit::from_alias("T"), Some(TimeUnit::Minutes));
        assert_eq!(TimeUnit::from_alias("min"), Some(TimeUnit::Minutes));
        assert_eq!(TimeUnit::from_alias("A"), Some(TimeUnit::YearEnd));
        assert_eq!(TimeUnit::from_alias("M"), Some(TimeUnit::MonthEnd));
        assert_eq!(TimeUnit::from_alias("fortnight"), None);
    }

    #[test]
    fn abbreviation_round_trips_through_alias() {
        for unit in [
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
            TimeUnit::Weeks,
            TimeUnit::MonthStart,
            TimeUnit::MonthEnd,
            TimeUnit::YearStart,
            TimeUnit::YearEnd,
        ] {
            assert_eq!(TimeUnit::from_alias(unit.abbreviation()), Some(unit));
        }
    }

    #[test]
    fn anchored_units_have_no_fixed_length() {
        assert!(TimeUnit::MonthEnd.is_anchored());
        assert_eq!(TimeUnit::MonthEnd.fixed_micros(), None);
        assert_eq!(TimeUnit::Days.fixed_micros(), Some(86_400_000_000));
    }
}
