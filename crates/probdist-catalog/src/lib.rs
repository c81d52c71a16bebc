//! Concrete probability distributions
//!
//! Every distribution is a zero-configuration type implementing
//! [`probdist_core::Distribution`]. They are grouped by support:
//!
//! - [`discrete`]: laws on the integers (binomial, Poisson, zeta, ...)
//! - [`continuous::bounded`]: laws on a finite interval `[a, b]`
//! - [`continuous::location_scale`]: laws on the whole real line
//! - [`continuous::lifetime`]: laws on a half-line (waiting times, sizes)
//!
//! [`all_distributions`] returns one instance of each, discrete laws first,
//! in the calculator's canonical order.
//!
//! # Example
//!
//! ```rust
//! use probdist_catalog::continuous::Normal;
//! use probdist_core::CheckedDistribution;
//!
//! let normal = Normal::new();
//! assert_eq!(normal.cumulative(0.0, &[0.0, 1.0]).unwrap(), 0.5);
//! ```

/// Declares a distribution type whose only state is its metadata
macro_rules! distribution_type {
    ($(#[$meta:meta])* $ty:ident => $info:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            info: probdist_core::DistributionInfo,
        }

        impl $ty {
            pub fn new() -> Self {
                Self { info: $info }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

pub mod continuous;
pub mod discrete;

use probdist_core::Distribution;

/// One instance of every distribution, discrete first
pub fn all_distributions() -> Vec<Box<dyn Distribution>> {
    let mut all = discrete::distributions();
    all.extend(continuous::distributions());
    all
}
