//! Parameter descriptors and call-time validation
//!
//! Every distribution declares an ordered list of [`ParameterDescriptor`]s.
//! The order defines the positional argument order of the exported
//! `_pdf`, `_cdf` and `_random` functions.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One side of a parameter's admissible range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub value: f64,
    pub inclusive: bool,
}

/// Declarative metadata for one distribution parameter
///
/// # Example
///
/// ```rust
/// use probdist_core::ParameterDescriptor;
///
/// let sigma = ParameterDescriptor::continuous("sigma").at_least(0.0);
/// assert!(sigma.has_min_value());
/// assert!(sigma.min_inclusive());
/// assert!(!sigma.has_max_value());
///
/// let n = ParameterDescriptor::integer("n").at_least(1.0).at_most(25.0);
/// assert!(n.is_discrete());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    id: &'static str,
    discrete: bool,
    min: Option<Bound>,
    max: Option<Bound>,
}

impl ParameterDescriptor {
    /// Real-valued parameter without bounds
    pub fn continuous(id: &'static str) -> Self {
        Self {
            id,
            discrete: false,
            min: None,
            max: None,
        }
    }

    /// Integer-valued parameter without bounds
    pub fn integer(id: &'static str) -> Self {
        Self {
            id,
            discrete: true,
            min: None,
            max: None,
        }
    }

    /// Inclusive lower bound (`value >= min`)
    pub fn at_least(mut self, min: f64) -> Self {
        self.min = Some(Bound {
            value: min,
            inclusive: true,
        });
        self
    }

    /// Exclusive lower bound (`value > min`)
    pub fn greater_than(mut self, min: f64) -> Self {
        self.min = Some(Bound {
            value: min,
            inclusive: false,
        });
        self
    }

    /// Inclusive upper bound (`value <= max`)
    pub fn at_most(mut self, max: f64) -> Self {
        self.max = Some(Bound {
            value: max,
            inclusive: true,
        });
        self
    }

    /// Exclusive upper bound (`value < max`)
    pub fn less_than(mut self, max: f64) -> Self {
        self.max = Some(Bound {
            value: max,
            inclusive: false,
        });
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    pub fn has_min_value(&self) -> bool {
        self.min.is_some()
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min.map(|b| b.value)
    }

    pub fn min_inclusive(&self) -> bool {
        self.min.map_or(false, |b| b.inclusive)
    }

    pub fn has_max_value(&self) -> bool {
        self.max.is_some()
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max.map(|b| b.value)
    }

    pub fn max_inclusive(&self) -> bool {
        self.max.map_or(false, |b| b.inclusive)
    }

    /// Check a single value against this descriptor
    pub fn check(&self, value: f64) -> Result<()> {
        if value.is_nan() {
            return Err(Error::not_a_number(self.id));
        }
        if self.discrete && value.fract() != 0.0 {
            return Err(Error::not_integer(self.id, value));
        }
        if let Some(min) = self.min {
            let ok = if min.inclusive {
                value >= min.value
            } else {
                value > min.value
            };
            if !ok {
                return Err(Error::below_minimum(self.id, min.value, min.inclusive, value));
            }
        }
        if let Some(max) = self.max {
            let ok = if max.inclusive {
                value <= max.value
            } else {
                value < max.value
            };
            if !ok {
                return Err(Error::above_maximum(self.id, max.value, max.inclusive, value));
            }
        }
        Ok(())
    }
}

/// Validated parameter values, in descriptor order
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValues {
    entries: Vec<(&'static str, f64)>,
}

impl ParameterValues {
    /// Validate `args` against `descriptors` (arity first, then each value)
    pub fn validate(descriptors: &[ParameterDescriptor], args: &[f64]) -> Result<Self> {
        if args.len() != descriptors.len() {
            return Err(Error::arity(descriptors.len(), args.len()));
        }
        let entries = descriptors
            .iter()
            .zip(args)
            .map(|(descriptor, &value)| {
                descriptor.check(value)?;
                Ok((descriptor.id(), value))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Value bound to the parameter named `id`
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == id)
            .map(|&(_, value)| value)
    }

    /// Positional values as a fixed-size array
    ///
    /// Positions past the end read as NaN; callers only destructure
    /// arrays matching their own descriptor count.
    pub fn array<const N: usize>(&self) -> [f64; N] {
        std::array::from_fn(|i| self.entries.get(i).map_or(f64::NAN, |&(_, v)| v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(identifier, value)` pairs in descriptor order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Index<usize> for ParameterValues {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.entries[index].1
    }
}
