//! Series generators over an injectable range collaborator.
//!
//! A [`Generator`] asks its [`RangeGenerator`] for the timestamps between
//! two endpoints, then fills one value per timestamp. Every generated
//! series has exactly as many values as the range has timestamps.

use std::f64::consts::PI;

use rand::Rng;
use tsgen_core::errors::Result;
use tsgen_core::Real;
use tsgen_math::{linspace, NormalSampler};
use tsgen_series::TimeSerie;
use tsgen_time::{CalendarRange, DatetimeIndex, Period, RangeGenerator, Timestamp};

use crate::params::{NoiseParams, WaveParams};

/// Builds series on the timestamps produced by a range collaborator.
///
/// # Example
/// ```
/// use tsgen_generators::{Generator, WaveParams};
///
/// let generator = Generator::new();
/// let ts = generator
///     .sine(
///         "2020".parse().unwrap(),
///         "2021".parse().unwrap(),
///         "1D".parse().unwrap(),
///         WaveParams::default().with_amplitude(2.0),
///     )
///     .unwrap();
/// assert_eq!(ts.len(), 367);
/// assert_eq!(ts.values()[0], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R = CalendarRange> {
    range: R,
}

impl Generator<CalendarRange> {
    /// A generator over the default [`CalendarRange`].
    pub fn new() -> Self {
        Self::with_range(CalendarRange::new())
    }
}

impl Default for Generator<CalendarRange> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RangeGenerator> Generator<R> {
    /// A generator drawing its timestamps from `range`.
    pub fn with_range(range: R) -> Self {
        Self { range }
    }

    /// The range collaborator.
    pub fn range(&self) -> &R {
        &self.range
    }

    /// The timestamps a series over `start..=end` at `step` would carry.
    pub fn index(&self, start: Timestamp, end: Timestamp, step: Period) -> Result<DatetimeIndex> {
        self.range.generate(start, end, step)
    }

    /// Linear ramp from `start_y` at the first timestamp to `end_y` at the
    /// last one.
    pub fn affine(
        &self,
        start: Timestamp,
        end: Timestamp,
        step: Period,
        start_y: Real,
        end_y: Real,
    ) -> Result<TimeSerie> {
        let index = self.index(start, end, step)?;
        let values = linspace(start_y, end_y, index.len());
        build("affine", index, values)
    }

    /// The same `value` at every timestamp.
    pub fn constant(&self, start: Timestamp, end: Timestamp, step: Period, value: Real) -> Result<TimeSerie> {
        self.affine(start, end, step, value, value)
    }

    /// `amplitude * cos(phase)` with the phase running from `0` to
    /// `2π * n_periods` across the range.
    pub fn cosine(&self, start: Timestamp, end: Timestamp, step: Period, params: WaveParams) -> Result<TimeSerie> {
        self.wave("cosine", start, end, step, params, Real::cos)
    }

    /// `amplitude * sin(phase)` with the phase running from `0` to
    /// `2π * n_periods` across the range.
    pub fn sine(&self, start: Timestamp, end: Timestamp, step: Period, params: WaveParams) -> Result<TimeSerie> {
        self.wave("sine", start, end, step, params, Real::sin)
    }

    /// Independent Gaussian draws from an OS-seeded engine. Two calls never
    /// share draws.
    ///
    /// # Errors
    /// Besides range errors, returns an error if the mean or standard
    /// deviation is not finite.
    pub fn randn(&self, start: Timestamp, end: Timestamp, step: Period, params: NoiseParams) -> Result<TimeSerie> {
        let index = self.index(start, end, step)?;
        let values = NormalSampler::from_entropy().sample(index.len(), params.mean, params.std)?;
        build("randn", index, values)
    }

    /// Like [`Generator::randn`], drawing from the given engine instead.
    pub fn randn_with<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        start: Timestamp,
        end: Timestamp,
        step: Period,
        params: NoiseParams,
    ) -> Result<TimeSerie> {
        let index = self.index(start, end, step)?;
        let values = NormalSampler::new(rng).sample(index.len(), params.mean, params.std)?;
        build("randn", index, values)
    }

    fn wave(
        &self,
        kind: &'static str,
        start: Timestamp,
        end: Timestamp,
        step: Period,
        params: WaveParams,
        f: fn(Real) -> Real,
    ) -> Result<TimeSerie> {
        let index = self.index(start, end, step)?;
        let phases = linspace(0.0, 2.0 * PI * params.n_periods, index.len());
        let values = phases.into_iter().map(|x| params.amplitude * f(x)).collect::<Vec<_>>();
        build(kind, index, values)
    }
}

fn build(kind: &'static str, index: DatetimeIndex, values: Vec<Real>) -> Result<TimeSerie> {
    tracing::debug!(kind, len = values.len(), "generated series");
    TimeSerie::from_datetime_index(index, values)
}
