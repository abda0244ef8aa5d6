//! Gaussian noise sources for the noisy problems

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Supplier of standard normal deviates
///
/// Noisy problems draw from the caller's source, so every evaluation with
/// noise needs exclusive access to one.
pub trait NoiseSource {
    fn standard_normal(&mut self) -> f64;
}

/// Standard normal deviates drawn from a seedable [`StdRng`]
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        let mut thread_rng = rand::rng();
        Self {
            rng: StdRng::from_rng(&mut thread_rng),
        }
    }
}

impl NoiseSource for GaussianNoise {
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Always returns 0, turning every noisy problem deterministic
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Multiplicative factor (1 + scale |N(0,1)|)
pub(crate) fn factor(scale: f64, noise: &mut dyn NoiseSource) -> f64 {
    1.0 + scale * noise.standard_normal().abs()
}
