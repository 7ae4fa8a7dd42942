//! # tsgen-math
//!
//! Numerical building blocks for series generation: evenly spaced sample
//! grids, floating-point comparison helpers, random number generation
//! (via `rand`, `rand_distr` and `rand_mt`), and sample statistics (via
//! `statrs`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Evenly spaced sample grids.
pub mod linspace;

/// Random number generators.
pub mod random_numbers;

/// Sample statistics.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{all_close, close, values_equal};
pub use linspace::linspace;
pub use random_numbers::{MersenneTwisterRng, NormalSampler};
pub use statistics::{mean, population_std_dev};
