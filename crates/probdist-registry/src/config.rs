//! Registry configuration

use probdist_core::{RandomSource, Result, SamplingConfig};
use serde::{Deserialize, Serialize};

/// Settings applied when the `_pdf`, `_cdf` and `_random` functions are built
///
/// # Example
///
/// ```rust
/// use probdist_registry::RegistryConfig;
///
/// let config = RegistryConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.sampling.bisection_tolerance, 0.001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Seed for the shared random source; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Limits for the numerical fallbacks
    pub sampling: SamplingConfig,
}

impl RegistryConfig {
    /// Seed the shared random source for reproducible `_random` calls
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A fresh random source honoring the seed and sampling limits
    pub fn random_source(&self) -> RandomSource {
        let source = match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        source.with_config(self.sampling)
    }
}
