//! Core traits and types for probability distributions
//!
//! This crate provides the shared contract every distribution of the
//! calculator builds on:
//!
//! - [`ParameterDescriptor`] / [`ParameterValues`]: declared parameters and
//!   call-time validation
//! - [`Distribution`]: density, CDF and sampler of one probability law
//! - [`CheckedDistribution`]: validated entry points (`density`,
//!   `cumulative`, `random`) implemented for every distribution
//! - [`fallback`]: generic summation, sequential-search and bisection
//!   fallbacks for laws without closed forms
//! - [`RandomSource`]: uniform generator plus polar Gaussian state
//! - [`special`]: gamma, incomplete gamma/beta, erf (via `statrs`), zeta
//!
//! # Example
//!
//! ```rust
//! use probdist_core::{
//!     CheckedDistribution, Distribution, DistributionInfo, ParameterDescriptor,
//!     ParameterValues, RandomSource,
//! };
//!
//! struct Exponential {
//!     info: DistributionInfo,
//! }
//!
//! impl Distribution for Exponential {
//!     fn info(&self) -> &DistributionInfo {
//!         &self.info
//!     }
//!     fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
//!         let [lambda] = params.array();
//!         if x < 0.0 { 0.0 } else { lambda * (-lambda * x).exp() }
//!     }
//!     fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
//!         let [lambda] = params.array();
//!         if x < 0.0 { 0.0 } else { 1.0 - (-lambda * x).exp() }
//!     }
//!     fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
//!         let [lambda] = params.array();
//!         -(1.0 - rng.uniform()).ln() / lambda
//!     }
//! }
//!
//! let exp = Exponential {
//!     info: DistributionInfo::continuous("exp", "Exponential distribution")
//!         .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0)),
//! };
//! assert_eq!(exp.density(0.0, &[2.0]).unwrap(), 2.0);
//! assert!(exp.density(0.0, &[]).unwrap_err().is_arity());
//! assert!(exp.density(0.0, &[-1.0]).unwrap_err().is_domain());
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod params;
pub mod random;
pub mod special;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use cache::MemoCache;
pub use config::SamplingConfig;
pub use params::{Bound, ParameterDescriptor, ParameterValues};
pub use random::{PolarGaussian, RandomSource};
pub use traits::{CheckedDistribution, Distribution, DistributionInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CheckedDistribution, Distribution, DistributionInfo, Error, MemoCache,
        ParameterDescriptor, ParameterValues, RandomSource, Result, SamplingConfig,
    };
    pub use crate::fallback;
    pub use crate::special;
}
