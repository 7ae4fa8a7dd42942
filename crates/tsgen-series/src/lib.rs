//! # tsgen-series
//!
//! The [`TimeSerie`] value type: an ordered datetime index with one `f64`
//! per timestamp, immutable once built, combined with scalars and other
//! series through the operators in [`ops`].
//!
//! ```
//! use tsgen_series::TimeSerie;
//! use tsgen_time::date_range;
//!
//! let index = date_range("2020", "2021", "1M").unwrap();
//! let a = TimeSerie::new(index.clone(), vec![2.0; 12]).unwrap();
//! let b = TimeSerie::new(index, vec![3.0; 12]).unwrap();
//!
//! assert_eq!((&a * &b).unwrap(), (&b * &a).unwrap());
//! assert_eq!(1.0 + &a, &a + 1.0);
//! assert!(a.try_pow(2.5).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Read-only table and sequence views.
pub mod frame;

/// Index kinds accepted by the generic constructor.
pub mod index;

/// Operand sum type.
pub mod operand;

/// Operator dispatch and the `std::ops` implementations.
pub mod ops;

/// The `TimeSerie` value type.
pub mod time_serie;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use frame::{Frame, LabeledSeries};
pub use index::AnyIndex;
pub use operand::Operand;
pub use ops::Op;
pub use time_serie::TimeSerie;
