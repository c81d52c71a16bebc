//! Pseudo-random number source for the samplers
//!
//! A [`RandomSource`] owns the uniform generator together with the spare
//! value of the polar Gaussian method. Give each worker its own source;
//! nothing here is shared process-wide.

use crate::SamplingConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Gamma};
use std::f64::consts::PI;
use tracing::warn;

/// State of the Marsaglia polar method, which yields Gaussian variates in pairs
#[derive(Debug, Clone, Default)]
pub struct PolarGaussian {
    spare: Option<f64>,
}

impl PolarGaussian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next call will be served from the stored spare value
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Standard normal variate
    ///
    /// The candidate loop is capped at `cap` rejected pairs; after that one
    /// trigonometric Box-Muller pair is used instead, which needs no rejection.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R, cap: usize) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        for _ in 0..cap {
            let u = rng.gen::<f64>() * 2.0 - 1.0;
            let v = rng.gen::<f64>() * 2.0 - 1.0;
            let s = u * u + v * v;
            if s >= 1.0 || s == 0.0 {
                continue;
            }
            let factor = (-2.0 * s.ln() / s).sqrt();
            self.spare = Some(v * factor);
            return u * factor;
        }

        warn!("Polar method exceeded {cap} candidates, using Box-Muller");
        let u1 = 1.0 - rng.gen::<f64>();
        let u2 = rng.gen::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        self.spare = Some(radius * (2.0 * PI * u2).sin());
        radius * (2.0 * PI * u2).cos()
    }
}

/// Uniform generator plus sampler state and limits
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    gaussian: PolarGaussian,
    config: SamplingConfig,
}

impl RandomSource {
    /// Source seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible source
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            gaussian: PolarGaussian::new(),
            config: SamplingConfig::default(),
        }
    }

    /// Replace the sampling limits
    pub fn with_config(mut self, config: SamplingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Uniform variate on `[0, 1)`
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Standard normal variate (polar method)
    pub fn standard_normal(&mut self) -> f64 {
        let cap = self.config.rejection_iteration_cap;
        self.gaussian.next(&mut self.rng, cap)
    }

    /// Normal variate with the given mean and standard deviation
    pub fn gaussian(&mut self, mean: f64, std: f64) -> f64 {
        mean + std * self.standard_normal()
    }

    /// Gamma variate with the given shape and unit scale
    ///
    /// Returns NaN for a non-positive or non-finite shape.
    pub fn standard_gamma(&mut self, shape: f64) -> f64 {
        match Gamma::new(shape, 1.0) {
            Ok(gamma) => gamma.sample(&mut self.rng),
            Err(_) => f64::NAN,
        }
    }

    /// Chi-squared variate with `k` degrees of freedom
    pub fn chi_squared(&mut self, k: f64) -> f64 {
        2.0 * self.standard_gamma(k / 2.0)
    }

    /// Beta variate on `[0, 1]`
    pub fn beta(&mut self, alpha: f64, beta: f64) -> f64 {
        let x = self.standard_gamma(alpha);
        let y = self.standard_gamma(beta);
        if x + y == 0.0 {
            // both gammas underflowed; fall back to the mean
            return alpha / (alpha + beta);
        }
        x / (x + y)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
