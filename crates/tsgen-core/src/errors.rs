//! Error types for tsgen.
//!
//! Every failure in the workspace is one variant of a single
//! `thiserror`-derived enum. All errors are precondition violations: they are
//! returned at the point of the offending call and never retried.

use thiserror::Error;

/// The top-level error type used throughout tsgen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A value of the wrong kind was supplied where a datetime index was
    /// expected.
    #[error("type error: {0}")]
    Type(String),

    /// Two sequences that must be positionally aligned have different lengths.
    #[error("shape mismatch: expected {expected} values, found {found}")]
    Shape {
        /// Length required by the other operand (usually the index).
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// An arithmetic operator received an operand it does not accept.
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperand {
        /// Operator symbol (`+`, `-`, `*`, `/`, `**`).
        op: &'static str,
        /// Type name of the left operand.
        left: String,
        /// Type name of the right operand.
        right: String,
    },

    /// Two series combined by a binary operator have different indexes.
    #[error("indexes do not match (left has {left_len} timestamps, right has {right_len})")]
    IndexMismatch {
        /// Length of the left index.
        left_len: usize,
        /// Length of the right index.
        right_len: usize,
    },

    /// A timestamp or step string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout tsgen.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tsgen_core::{ensure, errors::Error};
/// fn positive(x: f64) -> tsgen_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return the given error immediately.
///
/// # Example
/// ```
/// use tsgen_core::{fail, errors::Error};
/// fn always_err() -> tsgen_core::errors::Result<()> {
///     fail!(Error::Parse("bad input".into()));
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err.into())
    };
}
