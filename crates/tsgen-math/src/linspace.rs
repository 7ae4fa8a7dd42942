//! Evenly spaced sample grids.

use tsgen_core::Real;

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// The grid is computed as `i * step + start` with
/// `step = (end - start) / (n - 1)`; when that step underflows to zero the
/// fraction `i / (n - 1)` is scaled by the span instead. The last element is
/// set to `end` exactly, so two complementary ramps sum exactly to a
/// constant.
///
/// `n == 0` yields an empty grid and `n == 1` yields `[start]`.
///
/// ```
/// use tsgen_math::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
/// ```
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let div = (n - 1) as Real;
    let delta = end - start;
    let step = delta / div;
    let mut out: Vec<Real> = if step == 0.0 {
        (0..n).map(|i| (i as Real / div) * delta + start).collect()
    } else {
        (0..n).map(|i| i as Real * step + start).collect()
    };
    out[n - 1] = end;
    out
}
