//! `DatetimeIndex`: an ordered sequence of timestamps.

use crate::timestamp::Timestamp;

/// An ordered sequence of [`Timestamp`]s labelling the positions of a series.
///
/// The sequence is not required to be increasing or free of duplicates.
/// Two indexes are equal when they have the same length and the same
/// timestamp at every position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DatetimeIndex(Vec<Timestamp>);

impl DatetimeIndex {
    /// Wrap a vector of timestamps.
    pub fn new(timestamps: Vec<Timestamp>) -> Self {
        Self(timestamps)
    }

    /// Number of timestamps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The timestamp at position `i`, if any.
    pub fn get(&self, i: usize) -> Option<Timestamp> {
        self.0.get(i).copied()
    }

    /// The first timestamp.
    pub fn first(&self) -> Option<Timestamp> {
        self.0.first().copied()
    }

    /// The last timestamp.
    pub fn last(&self) -> Option<Timestamp> {
        self.0.last().copied()
    }

    /// Whether every timestamp is strictly later than the previous one.
    pub fn is_strictly_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] < w[1])
    }

    /// All timestamps as a slice.
    pub fn as_slice(&self) -> &[Timestamp] {
        &self.0
    }

    /// Iterate over the timestamps in order.
    pub fn iter(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Timestamp>> for DatetimeIndex {
    fn from(v: Vec<Timestamp>) -> Self {
        Self(v)
    }
}

impl From<&[Timestamp]> for DatetimeIndex {
    fn from(s: &[Timestamp]) -> Self {
        Self(s.to_vec())
    }
}

impl FromIterator<Timestamp> for DatetimeIndex {
    fn from_iter<I: IntoIterator<Item = Timestamp>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for DatetimeIndex {
    type Output = Timestamp;

    fn index(&self, i: usize) -> &Timestamp {
        &self.0[i]
    }
}
