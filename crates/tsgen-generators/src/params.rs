//! Shape parameters for the periodic and noise generators.

use tsgen_core::Real;

/// Shape of a periodic waveform.
///
/// The default is a unit amplitude over exactly one full period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Peak value of the wave.
    pub amplitude: Real,
    /// Number of full periods covered by the range (fractional allowed).
    pub n_periods: Real,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            n_periods: 1.0,
        }
    }
}

impl WaveParams {
    /// Wave parameters with an explicit amplitude and period count.
    pub fn new(amplitude: Real, n_periods: Real) -> Self {
        Self {
            amplitude,
            n_periods,
        }
    }

    /// Set the amplitude.
    pub fn with_amplitude(mut self, amplitude: Real) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the number of periods.
    pub fn with_n_periods(mut self, n_periods: Real) -> Self {
        self.n_periods = n_periods;
        self
    }
}

/// Moments of Gaussian noise.
///
/// The default is the standard normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Mean of the distribution.
    pub mean: Real,
    /// Standard deviation of the distribution.
    pub std: Real,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self { mean: 0.0, std: 1.0 }
    }
}

impl NoiseParams {
    /// Noise parameters with an explicit mean and standard deviation.
    pub fn new(mean: Real, std: Real) -> Self {
        Self { mean, std }
    }

    /// Set the mean.
    pub fn with_mean(mut self, mean: Real) -> Self {
        self.mean = mean;
        self
    }

    /// Set the standard deviation.
    pub fn with_std(mut self, std: Real) -> Self {
        self.std = std;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(WaveParams::default(), WaveParams::new(1.0, 1.0));
        assert_eq!(NoiseParams::default(), NoiseParams::new(0.0, 1.0));
    }

    #[test]
    fn builders_override_one_field() {
        let w = WaveParams::default().with_n_periods(0.25);
        assert_eq!(w.amplitude, 1.0);
        assert_eq!(w.n_periods, 0.25);
        let n = NoiseParams::default().with_mean(3.0).with_std(10.0);
        assert_eq!(n, NoiseParams::new(3.0, 10.0));
    }
}
