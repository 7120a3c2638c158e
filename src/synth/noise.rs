//! Gaussian measurement-noise injection
//! Location: src/synth/noise.rs

use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::{TransientConfig, FL_COUNT_MAX};

/// What to do with samples that noise pushes outside the 16-bit count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Leave out-of-range samples as drawn. Acquired-data tooling tolerates
    /// negative and overflowed counts, and some analyses depend on seeing
    /// the raw perturbation.
    #[default]
    Preserve,
    /// Clamp every sample into `[0, 65535]`.
    ClampTo16Bit,
}

/// Adds independent zero-mean Gaussian perturbation to a clean timeline.
///
/// The standard deviation is a configured percentage of the transient
/// amplitude. The injector never mutates its input, so a caller can re-draw
/// noise over the same clean timeline for repeatable regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseInjector {
    sigma: f64,
    clamp: ClampPolicy,
}

impl NoiseInjector {
    /// Injector with standard deviation `noise_pct / 100 × amplitude_counts`
    /// and the default [`ClampPolicy::Preserve`].
    pub fn from_config(config: &TransientConfig) -> Self {
        Self {
            sigma: config.noise_pct / 100.0 * f64::from(config.amplitude_counts),
            clamp: ClampPolicy::Preserve,
        }
    }

    /// Override the out-of-range sample policy.
    pub fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    /// Standard deviation of the perturbation (counts).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Perturb every sample independently, rounding the noise to the nearest
    /// count. A zero standard deviation returns a bit-identical copy without
    /// consuming any randomness.
    pub fn inject<R: Rng + ?Sized>(&self, clean: &[i32], rng: &mut R) -> Vec<i32> {
        if self.sigma == 0.0 {
            return clean.to_vec();
        }
        clean
            .iter()
            .map(|&sample| {
                let draw: f64 = rng.sample(StandardNormal);
                let noisy = f64::from(sample) + (draw * self.sigma).round();
                match self.clamp {
                    ClampPolicy::Preserve => noisy as i32,
                    ClampPolicy::ClampTo16Bit => {
                        noisy.clamp(0.0, f64::from(FL_COUNT_MAX)) as i32
                    }
                }
            })
            .collect()
    }
}
