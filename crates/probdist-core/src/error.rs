//! Error types for probability distribution evaluation
//!
//! Provides a unified error type for all probdist crates.

use thiserror::Error;

/// Core error type for distribution function calls
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of arguments passed to a `_pdf`, `_cdf` or `_random` call
    #[error("{expected} parameters expected but {actual} given.")]
    Arity { expected: usize, actual: usize },

    /// A parameter violates its discreteness, bound or a cross-parameter relation
    #[error("{0}")]
    Domain(String),

    /// A function name that is not part of the function map
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Malformed configuration
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Failure reported by the expression engine
    #[error("Engine error: {0}")]
    Engine(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a wrong argument count
    pub fn arity(expected: usize, actual: usize) -> Self {
        Self::Arity { expected, actual }
    }

    /// Create an error for a non-integer value bound to an integer parameter
    pub fn not_integer(parameter: &str, value: f64) -> Self {
        Self::Domain(format!("{parameter} has to be an integer but is {value}"))
    }

    /// Create an error for a NaN value
    pub fn not_a_number(parameter: &str) -> Self {
        Self::Domain(format!("{parameter} has to be a number"))
    }

    /// Create an error for a violated lower bound
    pub fn below_minimum(parameter: &str, min: f64, inclusive: bool, value: f64) -> Self {
        let op = if inclusive { ">=" } else { ">" };
        Self::Domain(format!("{parameter} has to be {op}{min} but is {value}"))
    }

    /// Create an error for a violated upper bound
    pub fn above_maximum(parameter: &str, max: f64, inclusive: bool, value: f64) -> Self {
        let op = if inclusive { "<=" } else { "<" };
        Self::Domain(format!("{parameter} has to be {op}{max} but is {value}"))
    }

    /// Create an error for a violated relation between two parameters,
    /// e.g. `relation("b", ">=", "a")` gives "b has to be >=a"
    pub fn relation(parameter: &str, op: &str, other: &str) -> Self {
        Self::Domain(format!("{parameter} has to be {op}{other}"))
    }

    /// Whether this is an argument-count error
    pub fn is_arity(&self) -> bool {
        matches!(self, Self::Arity { .. })
    }

    /// Whether this is a parameter-domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
