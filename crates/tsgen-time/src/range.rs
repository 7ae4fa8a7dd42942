//! Calendar range generation.
//!
//! A [`RangeGenerator`] turns `(start, end, step)` into the ordered
//! [`DatetimeIndex`] a series is built on. [`CalendarRange`] is the standard
//! implementation; anything implementing the trait (including a plain
//! closure) can be injected in its place.

use crate::datetime_index::DatetimeIndex;
use crate::period::Period;
use crate::timestamp::Timestamp;
use tsgen_core::ensure;
use tsgen_core::errors::{Error, Result};

/// Produces the timestamps between two endpoints at a given step.
pub trait RangeGenerator {
    /// Generate the ordered timestamps from `start` to `end`, both included
    /// when they land on a step boundary.
    fn generate(&self, start: Timestamp, end: Timestamp, step: Period) -> Result<DatetimeIndex>;
}

impl<F> RangeGenerator for F
where
    F: Fn(Timestamp, Timestamp, Period) -> Result<DatetimeIndex>,
{
    fn generate(&self, start: Timestamp, end: Timestamp, step: Period) -> Result<DatetimeIndex> {
        self(start, end, step)
    }
}

/// Gregorian-calendar range generator.
///
/// * Fixed steps (microseconds up to weeks) produce `start + k * step` for
///   every `k` with the result not after `end`.
/// * Anchored steps (month/year start/end) first snap forward to the nearest
///   anchor not before `start`, then roll `length` anchors at a time. The
///   time of day of `start` is kept on every anchor.
///
/// An empty index is returned when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    max_points: usize,
}

impl Default for CalendarRange {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarRange {
    /// Default upper bound on the number of generated timestamps.
    pub const DEFAULT_MAX_POINTS: usize = 10_000_000;

    /// A generator with the default point limit.
    pub fn new() -> Self {
        Self {
            max_points: Self::DEFAULT_MAX_POINTS,
        }
    }

    /// Cap the number of timestamps a single range may contain.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// The configured point limit.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    fn check_size(&self, n: usize, step: Period) -> Result<()> {
        if n > self.max_points {
            return Err(Error::InvalidArgument(format!(
                "range at step {step} would hold {n} timestamps, limit is {}",
                self.max_points
            )));
        }
        Ok(())
    }

    fn fixed(&self, start: Timestamp, end: Timestamp, step: Period, micros: i64) -> Result<Vec<Timestamp>> {
        let span = start.micros_until(end)?;
        let n = usize::try_from(span / micros + 1)
            .map_err(|_| Error::InvalidArgument(format!("range {start} .. {end} is too long")))?;
        self.check_size(n, step)?;
        let mut out = Vec::with_capacity(n);
        let mut offset = 0i64;
        for _ in 0..n {
            out.push(start.add_micros(offset)?);
            offset += micros;
        }
        Ok(out)
    }

    fn anchored(&self, start: Timestamp, end: Timestamp, step: Period, months: i64) -> Result<Vec<Timestamp>> {
        use crate::time_unit::TimeUnit;

        let on_first_day = start.day() == 1;
        let ordinal = start.month_ordinal();
        let (first, last_day) = match step.unit {
            TimeUnit::MonthEnd => (ordinal, true),
            TimeUnit::MonthStart => (ordinal + i64::from(!on_first_day), false),
            TimeUnit::YearEnd => (ordinal - ordinal.rem_euclid(12) + 11, true),
            TimeUnit::YearStart => {
                let january = ordinal - ordinal.rem_euclid(12);
                let on_new_year = ordinal == january && on_first_day;
                (january + if on_new_year { 0 } else { 12 }, false)
            }
            unit => {
                return Err(Error::InvalidArgument(format!(
                    "{unit} is not an anchored unit"
                )))
            }
        };
        let span = end.month_ordinal() - first;
        if span < 0 {
            return Ok(Vec::new());
        }
        let upper = usize::try_from(span / months + 1)
            .map_err(|_| Error::InvalidArgument(format!("range {start} .. {end} is too long")))?;
        self.check_size(upper, step)?;
        let mut out = Vec::with_capacity(upper);
        for k in 0..upper as i64 {
            let ts = Timestamp::at_month_ordinal(first + k * months, last_day, start.time())?;
            if ts > end {
                break;
            }
            out.push(ts);
        }
        Ok(out)
    }
}

impl RangeGenerator for CalendarRange {
    fn generate(&self, start: Timestamp, end: Timestamp, step: Period) -> Result<DatetimeIndex> {
        ensure!(step.length > 0, "step length must be positive, got {step}");
        let timestamps = if start > end {
            Vec::new()
        } else if let Some(micros) = step.fixed_micros() {
            self.fixed(start, end, step, micros)?
        } else if let Some(months) = step.anchored_months() {
            self.anchored(start, end, step, months)?
        } else {
            return Err(Error::InvalidArgument(format!("step {step} overflows")));
        };
        tracing::debug!(%start, %end, %step, len = timestamps.len(), "generated calendar range");
        Ok(DatetimeIndex::new(timestamps))
    }
}

/// Parse textual endpoints and step, then generate with [`CalendarRange`].
///
/// ```
/// use tsgen_time::date_range;
/// let idx = date_range("2020", "2021", "1M").unwrap();
/// assert_eq!(idx.len(), 12);
/// assert_eq!(idx.first().unwrap().to_string(), "2020-01-31");
/// ```
pub fn date_range(start: &str, end: &str, step: &str) -> Result<DatetimeIndex> {
    CalendarRange::new().generate(start.parse()?, end.parse()?, step.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn reversed_endpoints_give_empty_index() {
        assert!(date_range("2021", "2020", "1D").unwrap().is_empty());
        assert!(date_range("2021", "2020", "1M").unwrap().is_empty());
    }

    #[test]
    fn fixed_step_stops_before_overshooting() {
        let idx = date_range("2020-01-01", "2020-01-10", "4D").unwrap();
        let expected: DatetimeIndex = ["2020-01-01", "2020-01-05", "2020-01-09"]
            .iter()
            .map(|s| ts(s))
            .collect();
        assert_eq!(idx, expected);
    }

    #[test]
    fn point_limit_is_enforced() {
        let generator = CalendarRange::new().with_max_points(100);
        let err = generator
            .generate(ts("2020"), ts("2021"), "1h".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn zero_length_step_is_rejected() {
        use crate::time_unit::TimeUnit;

        for unit in [TimeUnit::Days, TimeUnit::Minutes, TimeUnit::MonthEnd, TimeUnit::YearStart] {
            let step = Period { length: 0, unit };
            let err = CalendarRange::new()
                .generate(ts("2020"), ts("2021"), step)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{unit}: {err:?}");
            // also rejected when the range would be empty
            assert!(CalendarRange::new().generate(ts("2021"), ts("2020"), step).is_err());
        }
    }

    #[test]
    fn closures_are_range_generators() {
        let fake = |start: Timestamp, _end: Timestamp, _step: Period| -> Result<DatetimeIndex> {
            Ok(DatetimeIndex::new(vec![start]))
        };
        let idx = fake.generate(ts("2020"), ts("2021"), Period::daily()).unwrap();
        assert_eq!(idx.len(), 1);
    }
}
