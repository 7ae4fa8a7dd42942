//! String-driven generators over the default calendar.
//!
//! Endpoints use the timestamp syntax of [`tsgen_time::Timestamp`]
//! (`"2020"`, `"2020-06"`, `"2020-06-15 12:00"`) and the step uses the
//! period syntax of [`tsgen_time::Period`] (`"1D"`, `"1M"`, `"15min"`).

use tsgen_core::errors::Result;
use tsgen_core::Real;
use tsgen_series::TimeSerie;
use tsgen_time::{Period, Timestamp};

use crate::generator::Generator;
use crate::params::{NoiseParams, WaveParams};

fn parse(start: &str, end: &str, step: &str) -> Result<(Timestamp, Timestamp, Period)> {
    Ok((start.parse()?, end.parse()?, step.parse()?))
}

/// Linear ramp from `start_y` to `end_y`.
///
/// ```
/// let ts = tsgen_generators::affine("2020", "2021", "1M", 0.0, 1.0).unwrap();
/// assert_eq!(ts.first().unwrap().1, 0.0);
/// assert_eq!(ts.last().unwrap().1, 1.0);
/// ```
pub fn affine(start: &str, end: &str, step: &str, start_y: Real, end_y: Real) -> Result<TimeSerie> {
    let (start, end, step) = parse(start, end, step)?;
    Generator::new().affine(start, end, step, start_y, end_y)
}

/// Constant `value` at every timestamp.
pub fn constant(start: &str, end: &str, step: &str, value: Real) -> Result<TimeSerie> {
    let (start, end, step) = parse(start, end, step)?;
    Generator::new().constant(start, end, step, value)
}

/// Cosine wave, starting at its peak.
pub fn cosine(start: &str, end: &str, step: &str, params: WaveParams) -> Result<TimeSerie> {
    let (start, end, step) = parse(start, end, step)?;
    Generator::new().cosine(start, end, step, params)
}

/// Sine wave, starting at zero.
pub fn sine(start: &str, end: &str, step: &str, params: WaveParams) -> Result<TimeSerie> {
    let (start, end, step) = parse(start, end, step)?;
    Generator::new().sine(start, end, step, params)
}

/// Gaussian noise, freshly drawn on every call.
pub fn randn(start: &str, end: &str, step: &str, params: NoiseParams) -> Result<TimeSerie> {
    let (start, end, step) = parse(start, end, step)?;
    Generator::new().randn(start, end, step, params)
}
