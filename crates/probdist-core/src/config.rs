//! Configuration for the numerical fallbacks

use crate::Result;
use serde::{Deserialize, Serialize};

/// Limits used by the generic samplers and summation fallbacks
///
/// The defaults reproduce the calculator's historical behavior: a bisection
/// bracket of ±10,000,000 narrowed down to a width of 0.001.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Half-width of the default bisection bracket for inverse-CDF sampling
    pub bisection_bound: f64,
    /// Bisection stops once the bracket is narrower than this
    pub bisection_tolerance: f64,
    /// Maximum number of candidates a rejection sampler may draw
    pub rejection_iteration_cap: usize,
    /// Maximum number of mass terms a discrete summation may visit
    pub discrete_term_limit: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            bisection_bound: 10_000_000.0,
            bisection_tolerance: 0.001,
            rejection_iteration_cap: 10_000,
            discrete_term_limit: 10_000_000,
        }
    }
}

impl SamplingConfig {
    /// Set the bisection bracket half-width
    pub fn with_bisection_bound(mut self, bound: f64) -> Self {
        assert!(bound > 0.0, "Bisection bound must be positive");
        self.bisection_bound = bound;
        self
    }

    /// Set the bisection stopping width
    pub fn with_bisection_tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0.0, "Bisection tolerance must be positive");
        self.bisection_tolerance = tolerance;
        self
    }

    /// Set the rejection sampling iteration cap
    pub fn with_rejection_iteration_cap(mut self, cap: usize) -> Self {
        assert!(cap > 0, "Rejection iteration cap must be positive");
        self.rejection_iteration_cap = cap;
        self
    }

    /// Set the discrete summation term limit
    pub fn with_discrete_term_limit(mut self, limit: u64) -> Self {
        assert!(limit > 0, "Discrete term limit must be positive");
        self.discrete_term_limit = limit;
        self
    }

    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
