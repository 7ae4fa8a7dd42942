//! # tsgen-core
//!
//! Primitive type aliases and the error hierarchy shared by every other
//! crate in the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for series values.
pub type Real = f64;

/// Signed integer type accepted as an integral scalar operand.
pub type Integer = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
