//! Read-only presentation views of a series.
//!
//! [`Frame`] is a single-column table keyed by the index; [`LabeledSeries`]
//! is the same data as a flat `(timestamp, value)` sequence. Neither depends
//! on a rendering backend: presentation layers read them and draw however
//! they like.

use tsgen_core::Real;
use tsgen_time::{DatetimeIndex, Timestamp};

/// A single-column table keyed by a datetime index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    index: DatetimeIndex,
    column: Vec<Real>,
}

impl Frame {
    /// Name of the only column.
    pub const COLUMN: &'static str = "y_values";

    pub(crate) fn new(index: DatetimeIndex, column: Vec<Real>) -> Self {
        Self { index, column }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column names, in order.
    pub fn columns(&self) -> [&'static str; 1] {
        [Self::COLUMN]
    }

    /// The row keys.
    pub fn index(&self) -> &DatetimeIndex {
        &self.index
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[Real]> {
        (name == Self::COLUMN).then_some(self.column.as_slice())
    }

    /// Iterate over rows as `(key, value)`.
    pub fn rows(&self) -> impl Iterator<Item = (Timestamp, Real)> + '_ {
        self.index.iter().zip(self.column.iter().copied())
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self.index.iter().map(|t| t.to_string()).collect();
        let cells: Vec<String> = self.column.iter().map(|v| format!("{v:.6}")).collect();
        let key_width = keys.iter().map(String::len).max().unwrap_or(0);
        let cell_width = cells
            .iter()
            .map(String::len)
            .chain(std::iter::once(Self::COLUMN.len()))
            .max()
            .unwrap_or(0);
        write!(f, "{:key_width$}  {:>cell_width$}", "", Self::COLUMN)?;
        for (key, cell) in keys.iter().zip(&cells) {
            write!(f, "\n{key:<key_width$}  {cell:>cell_width$}")?;
        }
        Ok(())
    }
}

/// A one-dimensional labeled sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    labels: DatetimeIndex,
    values: Vec<Real>,
}

impl LabeledSeries {
    pub(crate) fn new(labels: DatetimeIndex, values: Vec<Real>) -> Self {
        Self { labels, values }
    }

    /// Name of the sequence.
    pub fn name(&self) -> &'static str {
        Frame::COLUMN
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at the first position labelled `at`.
    pub fn get(&self, at: Timestamp) -> Option<Real> {
        self.labels
            .iter()
            .position(|t| t == at)
            .map(|i| self.values[i])
    }

    /// Iterate over `(label, value)` points.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, Real)> + '_ {
        self.labels.iter().zip(self.values.iter().copied())
    }

    /// Consume into `(label, value)` pairs.
    pub fn into_pairs(self) -> Vec<(Timestamp, Real)> {
        self.labels.iter().zip(self.values).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::TimeSerie;
    use tsgen_time::date_range;

    fn sample() -> TimeSerie {
        let idx = date_range("2020", "2020-03-31", "M").unwrap();
        TimeSerie::new(idx, vec![0.0, 0.5, 1.0]).unwrap()
    }

    #[test]
    fn frame_has_one_named_column() {
        let frame = sample().to_frame();
        assert_eq!(frame.columns(), ["y_values"]);
        assert_eq!(frame.column("y_values"), Some(&[0.0, 0.5, 1.0][..]));
        assert_eq!(frame.column("other"), None);
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn frame_display() {
        let expected = "            y_values\n\
                        2020-01-31  0.000000\n\
                        2020-02-29  0.500000\n\
                        2020-03-31  1.000000";
        assert_eq!(sample().to_frame().to_string(), expected);
    }

    #[test]
    fn labeled_series_lookup() {
        let s = sample().to_series();
        assert_eq!(s.name(), "y_values");
        assert_eq!(s.get("2020-02-29".parse().unwrap()), Some(0.5));
        assert_eq!(s.get("2020-02-28".parse().unwrap()), None);
        let pairs = s.into_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].1, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn series_serializes_index_and_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["values"], serde_json::json!([0.0, 0.5, 1.0]));
        assert_eq!(json["index"].as_array().map(Vec::len), Some(3));
    }
}
