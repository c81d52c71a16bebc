//! Named `_pdf`, `_cdf` and `_random` functions
//!
//! For a distribution `D` with parameters `p1..pn` three functions are
//! exported:
//!
//! - `D_pdf(x, p1, .., pn)`
//! - `D_cdf(x, p1, .., pn)`
//! - `D_random(p1, .., pn)`
//!
//! All `_random` functions of one [`FunctionMap`] draw from a single shared
//! [`RandomSource`].

use crate::config::RegistryConfig;
use crate::registry::distributions;
use probdist_core::{CheckedDistribution, Distribution, Error, RandomSource, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// A callable exported to the expression engine
pub type NativeFunction = Arc<dyn Fn(&[f64]) -> Result<f64> + Send + Sync>;

/// Random source shared by every `_random` function of a map
pub type SharedRandomSource = Arc<Mutex<RandomSource>>;

pub const PDF_SUFFIX: &str = "_pdf";
pub const CDF_SUFFIX: &str = "_cdf";
pub const RANDOM_SUFFIX: &str = "_random";

/// Function name to callable, ordered by name
#[derive(Clone, Default)]
pub struct FunctionMap {
    functions: BTreeMap<String, NativeFunction>,
}

impl FunctionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a function
    pub fn insert(&mut self, name: impl Into<String>, function: NativeFunction) {
        self.functions.insert(name.into(), function);
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Call the function registered under `name`
    pub fn call(&self, name: &str, args: &[f64]) -> Result<f64> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
        function(args)
    }

    /// Registered names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeFunction)> {
        self.functions.iter().map(|(name, f)| (name.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Move all functions of `other` into this map
    pub fn extend(&mut self, other: FunctionMap) {
        self.functions.extend(other.functions);
    }
}

impl IntoIterator for FunctionMap {
    type Item = (String, NativeFunction);
    type IntoIter = std::collections::btree_map::IntoIter<String, NativeFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.into_iter()
    }
}

impl fmt::Debug for FunctionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionMap")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Split the leading `x` off a `_pdf`/`_cdf` argument list
fn split_point<'a>(distribution: &dyn Distribution, args: &'a [f64]) -> Result<(f64, &'a [f64])> {
    match args.split_first() {
        Some((&x, params)) => Ok((x, params)),
        None => Err(Error::arity(distribution.parameters().len() + 1, 0)),
    }
}

/// The three functions of one distribution
pub fn functions_for(distribution: &'static dyn Distribution, rng: SharedRandomSource) -> FunctionMap {
    let name = distribution.name();
    let mut map = FunctionMap::new();

    map.insert(
        format!("{name}{PDF_SUFFIX}"),
        Arc::new(move |args: &[f64]| -> Result<f64> {
            let (x, params) = split_point(distribution, args)?;
            distribution.density(x, params)
        }),
    );

    map.insert(
        format!("{name}{CDF_SUFFIX}"),
        Arc::new(move |args: &[f64]| -> Result<f64> {
            let (x, params) = split_point(distribution, args)?;
            distribution.cumulative(x, params)
        }),
    );

    map.insert(
        format!("{name}{RANDOM_SUFFIX}"),
        Arc::new(move |args: &[f64]| -> Result<f64> {
            // a panic inside another draw leaves the generator state intact
            let mut source = rng.lock().unwrap_or_else(PoisonError::into_inner);
            let value = distribution.random(args, &mut source)?;
            trace!(distribution = distribution.name(), value, "drew random number");
            Ok(value)
        }),
    );

    map
}

/// Functions for the whole catalogue, sharing one random source
pub fn build_function_map(config: &RegistryConfig) -> FunctionMap {
    let rng: SharedRandomSource = Arc::new(Mutex::new(config.random_source()));
    let mut map = FunctionMap::new();
    for distribution in distributions() {
        map.extend(functions_for(distribution.as_ref(), Arc::clone(&rng)));
    }
    debug!(functions = map.len(), seeded = config.seed.is_some(), "built function map");
    map
}

/// Every exported function name, without building the functions
pub fn function_names() -> BTreeSet<String> {
    distributions()
        .iter()
        .flat_map(|d| {
            [PDF_SUFFIX, CDF_SUFFIX, RANDOM_SUFFIX].map(|suffix| format!("{}{suffix}", d.name()))
        })
        .collect()
}
