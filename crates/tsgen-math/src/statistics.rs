//! Sample statistics over value slices, backed by `statrs`.

use statrs::statistics::Statistics;
use tsgen_core::Real;

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[Real]) -> Real {
    values.iter().mean()
}

/// Population (biased, `1/N`) standard deviation. `NaN` for an empty slice.
pub fn population_std_dev(values: &[Real]) -> Real {
    values.iter().population_std_dev()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basic_statistics() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(mean(&xs), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(population_std_dev(&xs), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(population_std_dev(&[]).is_nan());
    }
}
