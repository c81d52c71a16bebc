//! Probability distributions for a calculator's expression language
//!
//! Sixty-two discrete and continuous distributions, each exposed to an
//! expression engine as three functions: `name_pdf(x, ...)`,
//! `name_cdf(x, ...)` and `name_random(...)`.
//!
//! The workspace is split into
//!
//! - [`probdist_core`]: the `Distribution` trait, parameter validation,
//!   errors, special functions and the random source
//! - [`probdist_catalog`]: the concrete distributions
//! - [`probdist_registry`]: the catalogue singleton, function map and
//!   engine loader
//!
//! # Example
//!
//! ```rust
//! use probdist::prelude::*;
//!
//! let functions = build_function_map(&RegistryConfig::default().with_seed(1));
//! assert_eq!(functions.call("normal_cdf", &[0.0, 0.0, 1.0]).unwrap(), 0.5);
//!
//! let err = functions.call("binomial_pdf", &[2.0, 5.0, 1.5]).unwrap_err();
//! assert_eq!(err.to_string(), "p has to be <=1 but is 1.5");
//! ```

pub use probdist_catalog;
pub use probdist_core;
pub use probdist_registry;

pub use probdist_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use probdist_core::prelude::*;
    pub use probdist_registry::{
        build_function_map, distributions, find, load_distribution_extensions, DistributionKind,
        ExpressionEngine, FunctionMap, NativeFunctionTable, RegistryConfig,
    };
}
