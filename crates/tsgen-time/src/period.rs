//! `Period`: a range step expressed as a multiple of a [`TimeUnit`].

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use tsgen_core::errors::{Error, Result};

/// A positive step length made up of an integer multiplier and a
/// [`TimeUnit`], e.g. `"1M"`, `"15min"`, `"2D"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units (always >= 1).
    pub length: u32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `length` is zero.
    pub fn new(length: u32, unit: TimeUnit) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidArgument(format!(
                "step length must be positive, got 0{}",
                unit.abbreviation()
            )));
        }
        Ok(Self { length, unit })
    }

    /// One day.
    pub const fn daily() -> Self {
        Self {
            length: 1,
            unit: TimeUnit::Days,
        }
    }

    /// One month, anchored on month ends.
    pub const fn monthly() -> Self {
        Self {
            length: 1,
            unit: TimeUnit::MonthEnd,
        }
    }

    /// Step length in microseconds, or `None` for anchored units.
    pub fn fixed_micros(&self) -> Option<i64> {
        self.unit
            .fixed_micros()
            .and_then(|u| u.checked_mul(i64::from(self.length)))
    }

    /// Number of months one step spans, or `None` for fixed-length units.
    pub fn anchored_months(&self) -> Option<i64> {
        let per_unit = match self.unit {
            TimeUnit::MonthStart | TimeUnit::MonthEnd => 1,
            TimeUnit::YearStart | TimeUnit::YearEnd => 12,
            _ => return None,
        };
        Some(per_unit * i64::from(self.length))
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Parse an optional multiplier followed by a unit alias.
    ///
    /// ```
    /// use tsgen_time::{Period, TimeUnit};
    /// let p: Period = "15min".parse().unwrap();
    /// assert_eq!(p.length, 15);
    /// assert_eq!(p.unit, TimeUnit::Minutes);
    /// assert_eq!("M".parse::<Period>().unwrap(), Period::monthly());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, alias) = s.split_at(split);
        let length = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|e| Error::Parse(format!("invalid step multiplier in {s:?}: {e}")))?
        };
        let unit = TimeUnit::from_alias(alias.trim())
            .ok_or_else(|| Error::Parse(format!("unknown step unit {alias:?} in {s:?}")))?;
        Period::new(length, unit)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.abbreviation())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::new(3, TimeUnit::MonthEnd).unwrap().to_string(), "3M");
        assert_eq!(Period::new(1, TimeUnit::YearStart).unwrap().to_string(), "1YS");
        assert_eq!(Period::new(15, TimeUnit::Minutes).unwrap().to_string(), "15min");
    }

    #[test]
    fn parse_with_and_without_multiplier() {
        assert_eq!("1D".parse::<Period>().unwrap(), Period::daily());
        assert_eq!("D".parse::<Period>().unwrap(), Period::daily());
        assert_eq!("1M".parse::<Period>().unwrap(), Period::monthly());
        let p: Period = "2MS".parse().unwrap();
        assert_eq!(p.length, 2);
        assert_eq!(p.unit, TimeUnit::MonthStart);
    }

    #[test]
    fn parse_rejects_zero_and_unknown_units() {
        assert!(matches!(
            "0D".parse::<Period>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!("3Q".parse::<Period>(), Err(Error::Parse(_))));
        assert!(matches!("".parse::<Period>(), Err(Error::Parse(_))));
    }

    #[test]
    fn lengths() {
        assert_eq!(
            "2h".parse::<Period>().unwrap().fixed_micros(),
            Some(7_200_000_000)
        );
        assert_eq!("2Y".parse::<Period>().unwrap().anchored_months(), Some(24));
        assert_eq!(Period::daily().anchored_months(), None);
    }
}
