//! The distribution capability interface and its checked entry points
//!
//! Concrete distributions implement [`Distribution`] with unchecked
//! density, CDF and sampler methods. Callers go through
//! [`CheckedDistribution`], which performs the shared validation first:
//!
//! 1. argument count against the descriptor list,
//! 2. each value against its descriptor (integer, minimum, maximum),
//! 3. the distribution's own cross-parameter check,
//!
//! and only then dispatches to the implementation.

use crate::{ParameterDescriptor, ParameterValues, RandomSource, Result};
use tracing::trace;

/// Identity and parameter list of a distribution
#[derive(Debug, Clone)]
pub struct DistributionInfo {
    name: &'static str,
    display_name: &'static str,
    discrete: bool,
    parameters: Vec<ParameterDescriptor>,
}

impl DistributionInfo {
    /// Metadata for a continuous distribution
    pub fn continuous(name: &'static str, display_name: &'static str) -> Self {
        Self {
            name,
            display_name,
            discrete: false,
            parameters: Vec::new(),
        }
    }

    /// Metadata for a discrete distribution
    pub fn discrete(name: &'static str, display_name: &'static str) -> Self {
        Self {
            name,
            display_name,
            discrete: true,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter; the call order defines the argument order
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A probability law with density, cumulative distribution and sampler
///
/// The `pdf`, `cdf` and `sample` methods receive values that already
/// passed validation. They must not panic for such input; points outside
/// the support map to `0` (or `1` for the CDF), degenerate parameterizations
/// map to `+∞` at the single support point.
pub trait Distribution: Send + Sync {
    /// Metadata
    fn info(&self) -> &DistributionInfo;

    /// Cross-parameter constraints, e.g. `a <= b`
    fn check_parameters(&self, _params: &ParameterValues) -> Result<()> {
        Ok(())
    }

    /// Density (continuous) or mass (discrete) at `x`
    fn pdf(&self, params: &ParameterValues, x: f64) -> f64;

    /// Probability of a draw being `<= x`
    fn cdf(&self, params: &ParameterValues, x: f64) -> f64;

    /// One pseudo-random draw
    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64;

    /// Base name of the exported functions (`{name}_pdf`, ...)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Human readable name
    fn display_name(&self) -> &'static str {
        self.info().display_name
    }

    fn is_discrete(&self) -> bool {
        self.info().discrete
    }

    /// Parameter descriptors in positional order
    fn parameters(&self) -> &[ParameterDescriptor] {
        &self.info().parameters
    }
}

/// Validated entry points shared by every distribution
pub trait CheckedDistribution: Distribution {
    /// Run the full validation pipeline on `args`
    fn prepare(&self, args: &[f64]) -> Result<ParameterValues> {
        let values = ParameterValues::validate(self.parameters(), args)
            .and_then(|values| self.check_parameters(&values).map(|_| values));
        if let Err(err) = &values {
            trace!(distribution = self.name(), %err, "rejected parameters");
        }
        values
    }

    /// Density at `x`
    ///
    /// For discrete distributions a non-integer `x` has zero mass and
    /// returns `0` before the parameters are looked at.
    fn density(&self, x: f64, args: &[f64]) -> Result<f64> {
        if self.is_discrete() && x.fract() != 0.0 {
            return Ok(0.0);
        }
        let values = self.prepare(args)?;
        Ok(self.pdf(&values, x))
    }

    /// Cumulative probability at `x`, clamped to `[0, 1]`
    ///
    /// For discrete distributions `x` is floored first.
    fn cumulative(&self, x: f64, args: &[f64]) -> Result<f64> {
        let x = if self.is_discrete() { x.floor() } else { x };
        let values = self.prepare(args)?;
        Ok(self.cdf(&values, x).clamp(0.0, 1.0))
    }

    /// One pseudo-random draw
    fn random(&self, args: &[f64], rng: &mut RandomSource) -> Result<f64> {
        let values = self.prepare(args)?;
        Ok(self.sample(&values, rng))
    }
}

impl<D: Distribution + ?Sized> CheckedDistribution for D {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fallback, Error};

    /// Fair die on 1..=sides, using the discrete fallbacks
    struct Die {
        info: DistributionInfo,
    }

    impl Die {
        fn new() -> Self {
            Self {
                info: DistributionInfo::discrete("die", "Die")
                    .with_parameter(ParameterDescriptor::integer("sides").at_least(1.0)),
            }
        }
    }

    impl Distribution for Die {
        fn info(&self) -> &DistributionInfo {
            &self.info
        }

        fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
            let [sides] = params.array();
            if k < 1.0 || k > sides {
                0.0
            } else {
                1.0 / sides
            }
        }

        fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
            fallback::discrete_cdf(|i| self.pdf(params, i), 1.0, k)
        }

        fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
            fallback::discrete_sample(|i| self.pdf(params, i), 1.0, rng)
        }
    }

    /// Continuous uniform with a relational check
    struct Interval {
        info: DistributionInfo,
    }

    impl Distribution for Interval {
        fn info(&self) -> &DistributionInfo {
            &self.info
        }

        fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
            let [a, b] = params.array();
            if a > b {
                return Err(Error::relation("b", ">=", "a"));
            }
            Ok(())
        }

        fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
            let [a, b] = params.array();
            if x < a || x > b {
                0.0
            } else {
                1.0 / (b - a)
            }
        }

        fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
            let [a, b] = params.array();
            // deliberately unclamped to exercise the wrapper
            (x - a) / (b - a)
        }

        fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
            let [a, b] = params.array();
            a + (b - a) * rng.uniform()
        }
    }

    fn interval() -> Interval {
        Interval {
            info: DistributionInfo::continuous("interval", "Interval")
                .with_parameter(ParameterDescriptor::continuous("a"))
                .with_parameter(ParameterDescriptor::continuous("b")),
        }
    }

    #[test]
    fn test_metadata() {
        let die = Die::new();
        assert_eq!(die.name(), "die");
        assert_eq!(die.display_name(), "Die");
        assert!(die.is_discrete());
        assert_eq!(die.parameters().len(), 1);
        assert_eq!(die.parameters()[0].id(), "sides");
    }

    #[test]
    fn test_discrete_density_short_circuits_non_integer_x() {
        let die = Die::new();
        // invalid parameters are not even looked at
        assert_eq!(die.density(2.5, &[]).unwrap(), 0.0);
        assert_eq!(die.density(2.0, &[6.0]).unwrap(), 1.0 / 6.0);
    }

    #[test]
    fn test_discrete_cdf_floors_x() {
        let die = Die::new();
        assert!((die.cumulative(2.9, &[6.0]).unwrap() - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(die.cumulative(0.5, &[6.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_arity_and_domain_errors() {
        let die = Die::new();
        assert!(die.density(1.0, &[]).unwrap_err().is_arity());
        assert!(die.cumulative(1.0, &[6.0, 1.0]).unwrap_err().is_arity());
        assert!(die.random(&[0.0], &mut RandomSource::seeded(1)).unwrap_err().is_domain());
        assert!(die.random(&[2.5], &mut RandomSource::seeded(1)).unwrap_err().is_domain());
    }

    #[test]
    fn test_cross_parameter_check_runs_after_descriptor_checks() {
        let dist = interval();
        let err = dist.density(0.0, &[5.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "b has to be >=a");
        assert!(dist.density(0.0, &[5.0]).unwrap_err().is_arity());
    }

    #[test]
    fn test_cdf_is_clamped() {
        let dist = interval();
        assert_eq!(dist.cumulative(-10.0, &[0.0, 1.0]).unwrap(), 0.0);
        assert_eq!(dist.cumulative(10.0, &[0.0, 1.0]).unwrap(), 1.0);
        assert_eq!(dist.cumulative(0.25, &[0.0, 1.0]).unwrap(), 0.25);
    }

    #[test]
    fn test_random_through_trait_object() {
        let dist: Box<dyn Distribution> = Box::new(interval());
        let mut rng = RandomSource::seeded(9);
        for _ in 0..100 {
            let x = dist.random(&[2.0, 3.0], &mut rng).unwrap();
            assert!((2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn test_die_sampler_covers_support() {
        let die = Die::new();
        let mut rng = RandomSource::seeded(11);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let k = die.random(&[6.0], &mut rng).unwrap();
            assert!((1.0..=6.0).contains(&k));
            seen[k as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
