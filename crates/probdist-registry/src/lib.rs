//! Distribution registry for expression engines
//!
//! This crate turns the distribution catalogue into named functions a
//! calculator's expression engine can call:
//!
//! - [`registry`]: the process-wide catalogue, lookups and sorted listings
//! - [`functions`]: `_pdf`, `_cdf` and `_random` closures in a [`FunctionMap`]
//! - [`engine`]: the [`ExpressionEngine`] seam and the one-time loader
//! - [`describe`]: usage signatures and parameter domains for display
//!
//! # Example
//!
//! ```rust
//! use probdist_registry::{load_distribution_extensions, NativeFunctionTable, RegistryConfig};
//!
//! let mut engine = NativeFunctionTable::new();
//! let config = RegistryConfig::default().with_seed(42);
//! assert!(load_distribution_extensions(&mut engine, &config).unwrap());
//!
//! let p = engine.evaluate("poisson_pdf", &[3.0, 4.0]).unwrap();
//! assert!((p - 0.1954).abs() < 1e-4);
//! ```

pub mod config;
pub mod describe;
pub mod engine;
pub mod functions;
pub mod registry;

pub use config::RegistryConfig;
pub use describe::{DistributionSummary, ParameterSummary};
pub use engine::{load_distribution_extensions, ExpressionEngine, NativeFunctionTable};
pub use functions::{
    build_function_map, function_names, functions_for, FunctionMap, NativeFunction,
    SharedRandomSource,
};
pub use registry::{distributions, find, DistributionKind};
