//! Index values accepted by the generic `TimeSerie` constructor.

use tsgen_time::{DatetimeIndex, Timestamp};

/// Any sequence that could label the positions of a series.
///
/// Only [`AnyIndex::Datetime`] is a valid `TimeSerie` index; the other
/// variants exist so that callers holding a non-temporal index get a typed
/// rejection instead of a silent conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyIndex {
    /// Ordered timestamps.
    Datetime(DatetimeIndex),
    /// Integer positions or labels.
    Integer(Vec<i64>),
    /// String labels.
    Label(Vec<String>),
}

impl AnyIndex {
    /// Number of labels.
    pub fn len(&self) -> usize {
        match self {
            AnyIndex::Datetime(idx) => idx.len(),
            AnyIndex::Integer(v) => v.len(),
            AnyIndex::Label(v) => v.len(),
        }
    }

    /// Whether the index has no labels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the index kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyIndex::Datetime(_) => "datetime index",
            AnyIndex::Integer(_) => "integer index",
            AnyIndex::Label(_) => "label index",
        }
    }
}

impl From<DatetimeIndex> for AnyIndex {
    fn from(idx: DatetimeIndex) -> Self {
        AnyIndex::Datetime(idx)
    }
}

impl From<&DatetimeIndex> for AnyIndex {
    fn from(idx: &DatetimeIndex) -> Self {
        AnyIndex::Datetime(idx.clone())
    }
}

impl From<Vec<Timestamp>> for AnyIndex {
    fn from(v: Vec<Timestamp>) -> Self {
        AnyIndex::Datetime(v.into())
    }
}

impl From<Vec<i64>> for AnyIndex {
    fn from(v: Vec<i64>) -> Self {
        AnyIndex::Integer(v)
    }
}

impl From<Vec<String>> for AnyIndex {
    fn from(v: Vec<String>) -> Self {
        AnyIndex::Label(v)
    }
}

impl From<Vec<&str>> for AnyIndex {
    fn from(v: Vec<&str>) -> Self {
        AnyIndex::Label(v.into_iter().map(str::to_owned).collect())
    }
}
