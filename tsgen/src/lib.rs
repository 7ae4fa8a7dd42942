//! # tsgen
//!
//! Synthetic time series generation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tsgen-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use tsgen::{cosine, sine, WaveParams};
//!
//! let s = sine("2020", "2021", "1D", WaveParams::default()).unwrap();
//! let c = cosine("2020", "2021", "1D", WaveParams::default()).unwrap();
//!
//! // sin² + cos² = 1
//! let one = (s.try_pow(2).unwrap() + &c.try_pow(2).unwrap()).unwrap();
//! assert!(one.values().iter().all(|v| (v - 1.0).abs() < 1e-12));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use tsgen_core as core;

/// Timestamps, steps, datetime indexes, and calendar ranges.
pub use tsgen_time as time;

/// Sampling grids, comparison helpers, RNG, and statistics.
pub use tsgen_math as math;

/// The `TimeSerie` value type and its arithmetic.
pub use tsgen_series as series;

/// Waveform and noise generators.
pub use tsgen_generators as generators;

pub use tsgen_core::{Error, Result};
pub use tsgen_generators::{affine, constant, cosine, randn, sine, Generator, NoiseParams, WaveParams};
pub use tsgen_series::{Operand, TimeSerie};
pub use tsgen_time::{date_range, CalendarRange, DatetimeIndex, Period, RangeGenerator, Timestamp};
