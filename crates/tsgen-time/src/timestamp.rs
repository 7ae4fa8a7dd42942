//! `Timestamp` type: a naive (timezone-less) point in time.
//!
//! Wraps [`chrono::NaiveDateTime`] with the parsing and calendar helpers the
//! range generator needs. Textual forms accepted by [`Timestamp::from_str`]:
//!
//! * `YYYY`: January 1st of that year
//! * `YYYY-MM`: first day of that month
//! * `YYYY-MM-DD`
//! * `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM:SS[.fff]`

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tsgen_core::errors::{Error, Result};

/// A point in time with microsecond resolution.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Midnight of the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// A timestamp from calendar and wall-clock fields.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::InvalidArgument(format!("invalid date {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            Error::InvalidArgument(format!("invalid time {hour:02}:{minute:02}:{second:02}"))
        })?;
        Ok(Self(date.and_time(time)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The wrapped chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Time of day.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Whether the time of day is exactly midnight.
    pub fn is_midnight(&self) -> bool {
        self.0.time() == NaiveTime::MIN
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by a fixed number of microseconds.
    pub fn add_micros(self, micros: i64) -> Result<Self> {
        self.0
            .checked_add_signed(Duration::microseconds(micros))
            .map(Self)
            .ok_or_else(|| Error::InvalidArgument(format!("{self} + {micros}us overflows")))
    }

    /// Microseconds from `self` to `other` (positive if `other` is later).
    pub fn micros_until(&self, other: Timestamp) -> Result<i64> {
        (other.0 - self.0)
            .num_microseconds()
            .ok_or_else(|| Error::InvalidArgument(format!("span {self} .. {other} overflows")))
    }

    /// Months elapsed since year 0, month 1 (`year * 12 + month - 1`).
    pub(crate) fn month_ordinal(&self) -> i64 {
        i64::from(self.0.year()) * 12 + i64::from(self.0.month0())
    }

    /// First or last day of the month with ordinal `ordinal`, at time `time`.
    pub(crate) fn at_month_ordinal(ordinal: i64, last_day: bool, time: NaiveTime) -> Result<Self> {
        let year = i32::try_from(ordinal.div_euclid(12))
            .map_err(|_| Error::InvalidArgument(format!("month ordinal {ordinal} out of range")))?;
        let month = ordinal.rem_euclid(12) as u32 + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::InvalidArgument(format!("year {year} out of range")))?;
        let date = if last_day {
            let days = days_in_month(year, month);
            first
                .with_day(days)
                .ok_or_else(|| Error::InvalidArgument(format!("invalid day {days}")))?
        } else {
            first
        };
        Ok(Self(date.and_time(time)))
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(d: NaiveDate) -> Self {
        Self(d.and_time(NaiveTime::MIN))
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(dt));
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(d.into());
        }
        let fields: Vec<&str> = s.split('-').collect();
        let parsed: Option<(i32, u32)> = match fields.as_slice() {
            [y] if y.len() == 4 => y.parse().ok().map(|y| (y, 1)),
            [y, m] if y.len() == 4 && m.len() <= 2 => y.parse().ok().zip(m.parse().ok()),
            _ => None,
        };
        match parsed {
            Some((year, month)) => Self::from_ymd(year, month, 1)
                .map_err(|_| Error::Parse(format!("invalid timestamp {s:?}"))),
            None => Err(Error::Parse(format!("unrecognised timestamp {s:?}"))),
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_midnight() {
            write!(f, "{}", self.0.format("%Y-%m-%d"))
        } else if self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.6f"))
        }
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({self})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
