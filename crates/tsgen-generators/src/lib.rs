//! # tsgen-generators
//!
//! Synthetic signal generators: linear ramps, constants, sine and cosine
//! waves, and Gaussian noise, each producing a
//! [`TimeSerie`](tsgen_series::TimeSerie) over a generated datetime range.
//!
//! The free functions take textual endpoints and step and use the default
//! calendar. [`Generator`] takes typed arguments and lets callers inject
//! their own [`tsgen_time::RangeGenerator`].
//!
//! ```
//! use tsgen_generators::{affine, constant};
//!
//! let up = affine("2020", "2021", "1M", 0.0, 1.0).unwrap();
//! let down = affine("2020", "2021", "1M", 1.0, 0.0).unwrap();
//! assert_eq!((&up + &down).unwrap(), constant("2020", "2021", "1M", 1.0).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The range-injectable `Generator`.
pub mod generator;

/// Wave and noise shape parameters.
pub mod params;

/// Generators over textual endpoints and steps.
pub mod waveforms;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use generator::Generator;
pub use params::{NoiseParams, WaveParams};
pub use waveforms::{affine, constant, cosine, randn, sine};
