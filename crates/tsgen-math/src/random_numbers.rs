//! Random number generators.
//!
//! [`MersenneTwisterRng`] adapts the `rand_mt` MT19937-64 engine to the
//! `rand` traits so it can drive any `rand_distr` distribution.
//! [`NormalSampler`] draws independent normal deviates from any such engine.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;
use tsgen_core::errors::Result;
use tsgen_core::{ensure, Real};

/// A seedable pseudo-random engine based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterRng {
    inner: Mt19937GenRand64,
}

impl MersenneTwisterRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mt19937GenRand64::new(seed),
        }
    }
}

impl RngCore for MersenneTwisterRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.inner.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Draws normally distributed samples `std * z + mean`, `z ~ N(0, 1)`.
pub struct NormalSampler<R> {
    rng: R,
}

impl<R: Rng> NormalSampler<R> {
    /// Wrap an existing engine.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one standard-normal deviate.
    pub fn next_standard(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }

    /// Draw `n` independent samples with the given mean and standard
    /// deviation.
    ///
    /// # Errors
    /// Returns an error if `mean` or `std` is not finite.
    pub fn sample(&mut self, n: usize, mean: Real, std: Real) -> Result<Vec<Real>> {
        ensure!(mean.is_finite(), "mean must be finite, got {mean}");
        ensure!(std.is_finite(), "standard deviation must be finite, got {std}");
        Ok((0..n).map(|_| std * self.next_standard() + mean).collect())
    }

    /// Give back the wrapped engine.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl NormalSampler<StdRng> {
    /// A sampler seeded from operating-system entropy. Draws differ on every
    /// call.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl NormalSampler<MersenneTwisterRng> {
    /// A reproducible sampler backed by a seeded Mersenne Twister.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(MersenneTwisterRng::new(seed))
    }
}
