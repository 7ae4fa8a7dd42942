//! # tsgen-time
//!
//! Timestamps, step periods, datetime indexes, and the calendar range
//! generator that produces them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DatetimeIndex`: an ordered sequence of timestamps.
pub mod datetime_index;

/// `Period`: a range step.
pub mod period;

/// `RangeGenerator` trait and the `CalendarRange` implementation.
pub mod range;

/// `Timestamp` type and calendar helpers.
pub mod timestamp;

/// `TimeUnit`: microseconds up to anchored years.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use datetime_index::DatetimeIndex;
pub use period::Period;
pub use range::{date_range, CalendarRange, RangeGenerator};
pub use time_unit::TimeUnit;
pub use timestamp::Timestamp;
