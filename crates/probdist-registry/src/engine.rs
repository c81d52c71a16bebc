//! Expression engine integration
//!
//! The calculator's expression engine is an external component. It only
//! needs to accept a batch of named functions and remember whether the
//! distribution functions were already imported.

use crate::config::RegistryConfig;
use crate::functions::{build_function_map, FunctionMap};
use anyhow::bail;
use probdist_core::Result;
use tracing::{debug, instrument};

/// The engine side of function registration
pub trait ExpressionEngine {
    /// Make `functions` callable by name from expressions
    fn import_functions(&mut self, functions: FunctionMap) -> anyhow::Result<()>;

    /// Whether [`load_distribution_extensions`] already succeeded on this engine
    fn distribution_extensions_loaded(&self) -> bool;

    fn mark_distribution_extensions_loaded(&mut self);
}

/// Import every `_pdf`, `_cdf` and `_random` function into `engine`
///
/// Returns `Ok(false)` without touching the engine when the functions were
/// loaded before. The loaded flag is only set after a successful import, so
/// a failed import can be retried.
#[instrument(skip_all, fields(seeded = config.seed.is_some()))]
pub fn load_distribution_extensions<E>(engine: &mut E, config: &RegistryConfig) -> Result<bool>
where
    E: ExpressionEngine + ?Sized,
{
    if engine.distribution_extensions_loaded() {
        debug!("distribution functions already loaded");
        return Ok(false);
    }

    let functions = build_function_map(config);
    let count = functions.len();
    engine.import_functions(functions)?;
    engine.mark_distribution_extensions_loaded();

    debug!(functions = count, "loaded distribution functions");
    Ok(true)
}

/// Minimal engine: a table of native functions callable by name
///
/// Useful on its own when no full expression language is needed.
#[derive(Debug, Default)]
pub struct NativeFunctionTable {
    functions: FunctionMap,
    distributions_loaded: bool,
}

impl NativeFunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call a previously imported function
    pub fn evaluate(&self, name: &str, args: &[f64]) -> Result<f64> {
        self.functions.call(name, args)
    }

    pub fn functions(&self) -> &FunctionMap {
        &self.functions
    }
}

impl ExpressionEngine for NativeFunctionTable {
    /// Rejects the whole batch if any name is already taken
    fn import_functions(&mut self, functions: FunctionMap) -> anyhow::Result<()> {
        if let Some(name) = functions.names().find(|name| self.functions.contains(name)) {
            bail!("function {name} is already defined");
        }
        self.functions.extend(functions);
        Ok(())
    }

    fn distribution_extensions_loaded(&self) -> bool {
        self.distributions_loaded
    }

    fn mark_distribution_extensions_loaded(&mut self) {
        self.distributions_loaded = true;
    }
}
