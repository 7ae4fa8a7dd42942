//! The `TimeSerie` value type.
//!
//! A `TimeSerie` pairs a [`DatetimeIndex`] with one `f64` per timestamp.
//! Instances are immutable: there are no mutating accessors, and every
//! arithmetic operation (see [`crate::ops`]) returns a fresh instance with
//! its own storage.

use tsgen_core::errors::{Error, Result};
use tsgen_core::{fail, Real};
use tsgen_math::statistics;
use tsgen_time::{DatetimeIndex, Timestamp};

use crate::frame::{Frame, LabeledSeries};
use crate::index::AnyIndex;
use crate::operand::Operand;

/// A one-dimensional, time-indexed numeric signal.
///
/// # Example
/// ```
/// use tsgen_series::TimeSerie;
/// use tsgen_time::date_range;
///
/// let index = date_range("2020", "2021", "1M").unwrap();
/// let ts = TimeSerie::new(index, vec![1.0; 12]).unwrap();
/// let shifted = (&ts + 3.0 - &ts).unwrap();
/// assert!(shifted.values().iter().all(|&v| v == 3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSerie {
    index: DatetimeIndex,
    values: Vec<Real>,
}

impl TimeSerie {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Build a series from an index and positionally aligned values.
    ///
    /// The values are copied into storage owned by the series. NaN and
    /// infinite values are accepted as-is.
    ///
    /// # Errors
    /// * [`Error::Type`] if `index` is not a datetime index.
    /// * [`Error::Shape`] if `index` and `values` have different lengths.
    pub fn new(index: impl Into<AnyIndex>, values: impl Into<Vec<Real>>) -> Result<Self> {
        match index.into() {
            AnyIndex::Datetime(index) => Self::from_datetime_index(index, values),
            other => Err(Error::Type(format!(
                "index should be a datetime index, got a {}",
                other.kind()
            ))),
        }
    }

    /// Build a series from a datetime index and positionally aligned values.
    ///
    /// # Errors
    /// Returns [`Error::Shape`] if the lengths differ.
    pub fn from_datetime_index(index: DatetimeIndex, values: impl Into<Vec<Real>>) -> Result<Self> {
        let values = values.into();
        if index.len() != values.len() {
            fail!(Error::Shape {
                expected: index.len(),
                found: values.len(),
            });
        }
        Ok(Self { index, values })
    }

    /// Assemble a series from parts already known to have equal lengths.
    pub(crate) fn from_parts(index: DatetimeIndex, values: Vec<Real>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of timestamps.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The timestamp index.
    pub fn index(&self) -> &DatetimeIndex {
        &self.index
    }

    /// The values, one per timestamp.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// The first `(timestamp, value)` pair.
    pub fn first(&self) -> Option<(Timestamp, Real)> {
        self.index.first().zip(self.values.first().copied())
    }

    /// The last `(timestamp, value)` pair.
    pub fn last(&self) -> Option<(Timestamp, Real)> {
        self.index.last().zip(self.values.last().copied())
    }

    /// Iterate over `(timestamp, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, Real)> + '_ {
        self.index.iter().zip(self.values.iter().copied())
    }

    /// Whether the two series share an element-wise equal index.
    pub fn is_aligned_with(&self, other: &TimeSerie) -> bool {
        self.index == other.index
    }

    /// Arithmetic mean of the values (`NaN` when empty).
    pub fn mean(&self) -> Real {
        statistics::mean(&self.values)
    }

    /// Population standard deviation of the values (`NaN` when empty).
    pub fn std_dev(&self) -> Real {
        statistics::population_std_dev(&self.values)
    }

    // ── Equality ─────────────────────────────────────────────────────────

    /// Compare against any operand. Only another series with an equal index
    /// and exactly equal values compares equal; scalars and unsupported
    /// operands are never equal to a series.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match other.into() {
            Operand::Series(s) => self == s,
            _ => false,
        }
    }

    // ── Views ────────────────────────────────────────────────────────────

    /// Single-column table view keyed by the index.
    pub fn to_frame(&self) -> Frame {
        Frame::new(self.index.clone(), self.values.clone())
    }

    /// Plain labeled sequence view.
    pub fn to_series(&self) -> LabeledSeries {
        LabeledSeries::new(self.index.clone(), self.values.clone())
    }
}

impl PartialEq<Operand<'_>> for TimeSerie {
    fn eq(&self, other: &Operand<'_>) -> bool {
        self.equals(*other)
    }
}

impl std::fmt::Display for TimeSerie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_frame())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_time::date_range;

    fn monthly() -> DatetimeIndex {
        date_range("2020", "2021", "1M").unwrap()
    }

    #[test]
    fn construction_copies_values() {
        let mut source = vec![1.0; 12];
        let ts = TimeSerie::new(monthly(), source.as_slice()).unwrap();
        source[0] = 99.0;
        assert_eq!(ts.values()[0], 1.0);
        assert_eq!(ts.len(), 12);
    }

    #[test]
    fn non_datetime_index_is_a_type_error() {
        let err = TimeSerie::new(vec![1i64, 2, 3], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        let err = TimeSerie::new(vec!["a", "b"], vec![0.0; 2]).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }

    #[test]
    fn type_check_precedes_shape_check() {
        let err = TimeSerie::new(vec![1i64, 2, 3], vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }

    #[test]
    fn length_mismatch_is_a_shape_error() {
        let err = TimeSerie::new(monthly(), vec![0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::Shape {
                expected: 12,
                found: 11
            }
        );
    }

    #[test]
    fn nan_and_infinity_are_accepted() {
        let idx = date_range("2020-01-01", "2020-01-03", "D").unwrap();
        let ts = TimeSerie::new(idx, vec![Real::NAN, Real::INFINITY, 0.0]).unwrap();
        assert!(ts.values()[0].is_nan());
        // NaN never equals itself, so neither does a series holding one
        assert_ne!(ts, ts.clone());
    }

    #[test]
    fn equality_against_non_series_is_false() {
        let ts = TimeSerie::new(monthly(), vec![1.0; 12]).unwrap();
        assert!(!ts.equals(1.0));
        assert!(!ts.equals(1));
        assert!(!ts.equals("text"));
        assert!(ts.equals(&ts));
        assert!(ts == Operand::Series(&ts));
        assert!(ts != Operand::Real(1.0));
    }

    #[test]
    fn equality_needs_equal_index_and_values() {
        let a = TimeSerie::new(monthly(), vec![1.0; 12]).unwrap();
        let b = TimeSerie::new(monthly(), vec![1.0; 12]).unwrap();
        let mut vals = vec![1.0; 12];
        vals[11] = 1.0 + 1e-12;
        let c = TimeSerie::new(monthly(), vals).unwrap();
        let d = TimeSerie::new(date_range("2020", "2021", "MS").unwrap(), vec![1.0; 13]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn first_last_and_iteration() {
        let idx = date_range("2020-01-01", "2020-01-03", "D").unwrap();
        let ts = TimeSerie::new(idx.clone(), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.first(), Some((idx[0], 1.0)));
        assert_eq!(ts.last(), Some((idx[2], 3.0)));
        let sum: Real = ts.iter().map(|(_, v)| v).sum();
        assert_eq!(sum, 6.0);
        assert_eq!(ts.mean(), 2.0);
    }

    #[test]
    fn display_renders_the_frame() {
        let idx = date_range("2020-01-01", "2020-01-02", "D").unwrap();
        let ts = TimeSerie::new(idx, vec![0.5, 1.0]).unwrap();
        assert_eq!(ts.to_string(), ts.to_frame().to_string());
    }
}
