//! Comparison utilities.

use tsgen_core::errors::{Error, Result};
use tsgen_core::Real;

/// Default epsilon for close-enough comparisons.
pub const EPSILON: Real = 1e-10;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

fn check_shape(a: &[Real], b: &[Real]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::Shape {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

/// Exact element-wise equality of two value arrays.
///
/// # Errors
/// Returns [`Error::Shape`] if the arrays have different lengths.
pub fn values_equal(a: &[Real], b: &[Real]) -> Result<bool> {
    check_shape(a, b)?;
    Ok(a.iter().zip(b).all(|(x, y)| x == y))
}

/// Element-wise [`close`] comparison of two value arrays.
///
/// # Errors
/// Returns [`Error::Shape`] if the arrays have different lengths.
pub fn all_close(a: &[Real], b: &[Real], epsilon: Real) -> Result<bool> {
    check_shape(a, b)?;
    Ok(a.iter().zip(b).all(|(x, y)| close(*x, *y, epsilon)))
}
