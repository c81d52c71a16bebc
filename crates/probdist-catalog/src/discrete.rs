//! Discrete distributions
//!
//! Mass functions are evaluated in log space where factorials or binomial
//! coefficients would overflow. Laws with a known closed-form CDF or an
//! exact inversion use it; the rest sum their mass function with
//! [`fallback::discrete_cdf`] starting at their support minimum.

use probdist_core::prelude::*;
use probdist_core::special::{ln_binom, ln_gamma, regularized_beta, riemann_zeta, upper_regularized_gamma};
use tracing::warn;

distribution_type!(
    /// Uniform on the integers `a..=b`
    DiscreteUniform => DistributionInfo::discrete("discreteuniform", "Discrete uniform distribution")
        .with_parameter(ParameterDescriptor::integer("a"))
        .with_parameter(ParameterDescriptor::integer("b"))
);

impl Distribution for DiscreteUniform {
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

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [a, b] = params.array();
        if k < a || k > b {
            return 0.0;
        }
        1.0 / (b - a + 1.0)
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [a, b] = params.array();
        if k < a {
            0.0
        } else if k >= b {
            1.0
        } else {
            (k - a + 1.0) / (b - a + 1.0)
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        (a + (rng.uniform() * (b - a + 1.0)).floor()).min(b)
    }
}

distribution_type!(
    /// Number of marked items in `n` draws without replacement from `N` items, `R` of them marked
    Hypergeometric => DistributionInfo::discrete("hypergeom", "Hypergeometric distribution")
        .with_parameter(ParameterDescriptor::integer("N").at_least(1.0))
        .with_parameter(ParameterDescriptor::integer("R").at_least(0.0))
        .with_parameter(ParameterDescriptor::integer("n").at_least(1.0))
);

impl Distribution for Hypergeometric {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [total, marked, draws] = params.array();
        if marked > total {
            return Err(Error::relation("R", "<=", "N"));
        }
        if draws > total {
            return Err(Error::relation("n", "<=", "N"));
        }
        Ok(())
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        if k < 0.0 {
            return 0.0;
        }
        let [total, marked, draws] = params.array();
        let ln_p = ln_binom(marked, k) + ln_binom(total - marked, draws - k) - ln_binom(total, draws);
        ln_p.exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        fallback::discrete_cdf(|i| self.pdf(params, i), 0.0, k)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        fallback::discrete_sample(|i| self.pdf(params, i), 0.0, rng)
    }
}

distribution_type!(
    /// Number of successes in `n` Bernoulli trials with success probability `p`
    Binomial => DistributionInfo::discrete("binomial", "Binomial distribution")
        .with_parameter(ParameterDescriptor::integer("n").at_least(1.0))
        .with_parameter(ParameterDescriptor::continuous("p").at_least(0.0).at_most(1.0))
);

impl Distribution for Binomial {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [n, p] = params.array();
        if k < 0.0 || k > n {
            return 0.0;
        }
        if p == 0.0 {
            return if k == 0.0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if k == n { 1.0 } else { 0.0 };
        }
        (ln_binom(n, k) + k * p.ln() + (n - k) * (-p).ln_1p()).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [n, p] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        if k >= n {
            return 1.0;
        }
        regularized_beta(1.0 - p, n - k, k + 1.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        fallback::discrete_sample(|i| self.pdf(params, i), 0.0, rng)
    }
}

distribution_type!(
    /// Number of events in a unit interval at rate `lambda`
    Poisson => DistributionInfo::discrete("poisson", "Poisson distribution")
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for Poisson {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        (k * lambda.ln() - lambda - ln_gamma(k + 1.0)).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        upper_regularized_gamma(k + 1.0, lambda)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        fallback::discrete_sample(|i| self.pdf(params, i), 0.0, rng)
    }
}

distribution_type!(
    /// Number of failures before the first success
    Geometric => DistributionInfo::discrete("geometric", "Geometric distribution")
        .with_parameter(ParameterDescriptor::continuous("p").at_least(0.0).at_most(1.0))
);

impl Distribution for Geometric {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [p] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        p * (1.0 - p).powf(k)
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [p] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        1.0 - (1.0 - p).powf(k + 1.0)
    }

    /// `p = 0` never succeeds and yields `+∞`
    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [p] = params.array();
        if p == 1.0 {
            return 0.0;
        }
        if p == 0.0 {
            return f64::INFINITY;
        }
        let u = rng.uniform();
        ((-u).ln_1p() / (-p).ln_1p()).floor()
    }
}

distribution_type!(
    /// Number of draws without replacement until the `n`-th marked item is found
    NegativeHypergeometric => DistributionInfo::discrete("negativehypergeom", "Negative hypergeometric distribution")
        .with_parameter(ParameterDescriptor::integer("N").at_least(1.0))
        .with_parameter(ParameterDescriptor::integer("R").at_least(1.0))
        .with_parameter(ParameterDescriptor::integer("n").at_least(1.0))
);

impl Distribution for NegativeHypergeometric {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [total, marked, wanted] = params.array();
        if marked > total {
            return Err(Error::relation("R", "<=", "N"));
        }
        if wanted > marked {
            return Err(Error::relation("n", "<=", "R"));
        }
        Ok(())
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [total, marked, wanted] = params.array();
        if k < wanted || k > total {
            return 0.0;
        }
        let ln_p = ln_binom(k - 1.0, wanted - 1.0) + ln_binom(total - k, marked - wanted)
            - ln_binom(total, marked);
        ln_p.exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [_, _, wanted] = params.array();
        fallback::discrete_cdf(|i| self.pdf(params, i), wanted, k)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [_, _, wanted] = params.array();
        fallback::discrete_sample(|i| self.pdf(params, i), wanted, rng)
    }
}

distribution_type!(
    /// Number of failures before the `r`-th success
    NegativeBinomial => DistributionInfo::discrete("negativebinomial", "Negative binomial distribution")
        .with_parameter(ParameterDescriptor::integer("r").at_least(1.0))
        .with_parameter(ParameterDescriptor::continuous("p").at_least(0.0).at_most(1.0))
);

impl Distribution for NegativeBinomial {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [r, p] = params.array();
        if k < 0.0 || p == 0.0 {
            return 0.0;
        }
        if p == 1.0 {
            return if k == 0.0 { 1.0 } else { 0.0 };
        }
        (ln_binom(k + r - 1.0, k) + r * p.ln() + k * (-p).ln_1p()).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [r, p] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        regularized_beta(p, r, k + 1.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [_, p] = params.array();
        if p == 0.0 {
            return f64::INFINITY;
        }
        fallback::discrete_sample(|i| self.pdf(params, i), 0.0, rng)
    }
}

/// Zeta (Zipf) distribution on the positive integers with exponent `s`
///
/// ζ(s) is memoized. For `s = 1` the normalizer diverges: the mass
/// function is zero everywhere and draws are `+∞`.
#[derive(Debug, Clone)]
pub struct Zeta {
    info: DistributionInfo,
    normalizer: MemoCache<f64>,
}

impl Zeta {
    pub fn new() -> Self {
        Self {
            info: DistributionInfo::discrete("zeta", "Zeta distribution")
                .with_parameter(ParameterDescriptor::integer("s").at_least(1.0)),
            normalizer: MemoCache::new(),
        }
    }

    fn zeta(&self, s: f64) -> f64 {
        self.normalizer.get_or_compute(s, || riemann_zeta(s))
    }
}

impl Default for Zeta {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution for Zeta {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [s] = params.array();
        if k <= 0.0 {
            return 0.0;
        }
        k.powf(-s) / self.zeta(s)
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        fallback::discrete_cdf(|i| self.pdf(params, i), 1.0, k)
    }

    /// Devroye's rejection sampler
    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [s] = params.array();
        if s == 1.0 {
            return f64::INFINITY;
        }

        let b = 2f64.powf(s - 1.0);
        let cap = rng.config().rejection_iteration_cap;
        for _ in 0..cap {
            let u = 1.0 - rng.uniform();
            let v = rng.uniform();
            let x = u.powf(-1.0 / (s - 1.0)).floor();
            let t = (1.0 + 1.0 / x).powf(s - 1.0);
            if v * x * (t - 1.0) / (b - 1.0) <= t / b {
                return x;
            }
        }

        warn!("Zeta rejection sampler exceeded {cap} candidates for s={s}");
        fallback::discrete_sample(|i| self.pdf(params, i), 1.0, rng)
    }
}

distribution_type!(
    /// `-1` or `+1` with equal probability
    Rademacher => DistributionInfo::discrete("rademacher", "Rademacher distribution")
);

impl Distribution for Rademacher {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, _params: &ParameterValues, k: f64) -> f64 {
        if k == -1.0 || k == 1.0 {
            0.5
        } else {
            0.0
        }
    }

    fn cdf(&self, _params: &ParameterValues, k: f64) -> f64 {
        if k < -1.0 {
            0.0
        } else if k < 1.0 {
            0.5
        } else {
            1.0
        }
    }

    fn sample(&self, _params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        if rng.uniform() >= 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

distribution_type!(
    /// Single trial: `1` with probability `p`, `0` otherwise
    Bernoulli => DistributionInfo::discrete("bernoulli", "Bernoulli distribution")
        .with_parameter(ParameterDescriptor::continuous("p").greater_than(0.0).less_than(1.0))
);

impl Distribution for Bernoulli {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [p] = params.array();
        match k {
            k if k == 0.0 => 1.0 - p,
            k if k == 1.0 => p,
            _ => 0.0,
        }
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [p] = params.array();
        if k < 0.0 {
            0.0
        } else if k < 1.0 {
            1.0 - p
        } else {
            1.0
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [p] = params.array();
        if rng.uniform() < p {
            1.0
        } else {
            0.0
        }
    }
}

distribution_type!(
    /// Total progeny of a Poisson branching process with mean offspring `mu`
    Borel => DistributionInfo::discrete("borel", "Borel distribution")
        .with_parameter(ParameterDescriptor::continuous("mu").greater_than(0.0).less_than(1.0))
);

impl Distribution for Borel {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [mu] = params.array();
        if k <= 0.0 {
            return 0.0;
        }
        // e^{-mu k} (mu k)^{k-1} / k!
        (-mu * k + (k - 1.0) * (mu * k).ln() - ln_gamma(k + 1.0)).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        fallback::discrete_cdf(|i| self.pdf(params, i), 1.0, k)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        fallback::discrete_sample(|i| self.pdf(params, i), 1.0, rng)
    }
}

distribution_type!(
    /// Law of the continued-fraction coefficients of a uniform random number
    GaussKuzmin => DistributionInfo::discrete("gaussKuzmin", "Gauss-Kuzmin distribution")
);

impl Distribution for GaussKuzmin {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, _params: &ParameterValues, k: f64) -> f64 {
        if k <= 0.0 {
            return 0.0;
        }
        -(1.0 - 1.0 / ((k + 1.0) * (k + 1.0))).log2()
    }

    fn cdf(&self, _params: &ParameterValues, k: f64) -> f64 {
        if k < 1.0 {
            return 0.0;
        }
        1.0 - ((k + 2.0) / (k + 1.0)).log2()
    }

    fn sample(&self, _params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let u = rng.uniform();
        // smallest k with 1 - log2((k + 2) / (k + 1)) >= u
        let k = (1.0 / ((1.0 - u).exp2() - 1.0) - 1.0).ceil();
        k.max(1.0)
    }
}

distribution_type!(
    /// Logarithmic series distribution
    Logarithmic => DistributionInfo::discrete("logarithmic", "Logarithmic distribution")
        .with_parameter(ParameterDescriptor::continuous("p").greater_than(0.0).less_than(1.0))
);

impl Distribution for Logarithmic {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [p] = params.array();
        if k <= 0.0 {
            return 0.0;
        }
        -1.0 / (-p).ln_1p() * p.powf(k) / k
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        fallback::discrete_cdf(|i| self.pdf(params, i), 1.0, k)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        fallback::discrete_sample(|i| self.pdf(params, i), 1.0, rng)
    }
}

distribution_type!(
    /// Discrete exponential law of photon counts in a black-body mode
    Planck => DistributionInfo::discrete("planck", "Planck distribution")
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for Planck {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        -(-lambda).exp_m1() * (-lambda * k).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        -(-lambda * (k + 1.0)).exp_m1()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [lambda] = params.array();
        let u = rng.uniform();
        (-(-u).ln_1p() / lambda).floor()
    }
}

distribution_type!(
    /// Planck distribution truncated to the `N` levels `0..N`
    Boltzmann => DistributionInfo::discrete("boltzmann", "Boltzmann distribution")
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
        .with_parameter(ParameterDescriptor::integer("N").at_least(1.0))
);

impl Distribution for Boltzmann {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda, levels] = params.array();
        if k < 0.0 || k >= levels {
            return 0.0;
        }
        (-lambda).exp_m1() / (-lambda * levels).exp_m1() * (-lambda * k).exp()
    }

    fn cdf(&self, params: &ParameterValues, k: f64) -> f64 {
        let [lambda, levels] = params.array();
        if k < 0.0 {
            return 0.0;
        }
        if k >= levels - 1.0 {
            return 1.0;
        }
        (-lambda * (k + 1.0)).exp_m1() / (-lambda * levels).exp_m1()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [lambda, levels] = params.array();
        let mass = -(-lambda * levels).exp_m1();
        let u = rng.uniform();
        let k = (-(-u * mass).ln_1p() / lambda).floor();
        k.clamp(0.0, levels - 1.0)
    }
}

/// All discrete distributions in canonical order
pub fn distributions() -> Vec<Box<dyn Distribution>> {
    vec![
        Box::new(DiscreteUniform::new()),
        Box::new(Hypergeometric::new()),
        Box::new(Binomial::new()),
        Box::new(Poisson::new()),
        Box::new(Geometric::new()),
        Box::new(NegativeHypergeometric::new()),
        Box::new(NegativeBinomial::new()),
        Box::new(Zeta::new()),
        Box::new(Rademacher::new()),
        Box::new(Bernoulli::new()),
        Box::new(Borel::new()),
        Box::new(GaussKuzmin::new()),
        Box::new(Logarithmic::new()),
        Box::new(Planck::new()),
        Box::new(Boltzmann::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use statrs::distribution::{Discrete, DiscreteCDF};

    fn mass_sum(dist: &dyn Distribution, args: &[f64], range: std::ops::RangeInclusive<i64>) -> f64 {
        range
            .map(|k| dist.density(k as f64, args).unwrap())
            .sum()
    }

    fn sample_mean(dist: &dyn Distribution, args: &[f64], n: usize, seed: u64) -> f64 {
        let mut rng = RandomSource::seeded(seed);
        (0..n).map(|_| dist.random(args, &mut rng).unwrap()).sum::<f64>() / n as f64
    }

    /// Summation reference for closed-form CDFs
    fn summed_cdf(dist: &dyn Distribution, args: &[f64], lower: i64, k: i64) -> f64 {
        (lower..=k).map(|i| dist.density(i as f64, args).unwrap()).sum()
    }

    #[test]
    fn test_normalization() {
        let cases: Vec<(Box<dyn Distribution>, Vec<f64>, std::ops::RangeInclusive<i64>)> = vec![
            (Box::new(DiscreteUniform::new()), vec![-3.0, 4.0], -5..=6),
            (Box::new(Hypergeometric::new()), vec![50.0, 20.0, 10.0], 0..=10),
            (Box::new(Binomial::new()), vec![20.0, 0.3], 0..=20),
            (Box::new(Poisson::new()), vec![5.0], 0..=100),
            (Box::new(Geometric::new()), vec![0.4], 0..=200),
            (Box::new(NegativeHypergeometric::new()), vec![30.0, 10.0, 4.0], 0..=30),
            (Box::new(NegativeBinomial::new()), vec![3.0, 0.4], 0..=300),
            (Box::new(Rademacher::new()), vec![], -3..=3),
            (Box::new(Bernoulli::new()), vec![0.3], -1..=2),
            (Box::new(Borel::new()), vec![0.3], 0..=200),
            (Box::new(Logarithmic::new()), vec![0.6], 0..=300),
            (Box::new(Planck::new()), vec![0.7], 0..=300),
            (Box::new(Boltzmann::new()), vec![0.5, 8.0], -2..=10),
        ];
        for (dist, args, range) in cases {
            let total = mass_sum(dist.as_ref(), &args, range);
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_heavy_tailed_normalization() {
        // slowly converging tails only reach 1 approximately
        let zeta = Zeta::new();
        assert_abs_diff_eq!(mass_sum(&zeta, &[3.0], 1..=20_000), 1.0, epsilon = 1e-6);

        let gauss_kuzmin = GaussKuzmin::new();
        assert_abs_diff_eq!(mass_sum(&gauss_kuzmin, &[], 1..=100_000), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_poisson_reference_values() {
        let poisson = Poisson::new();
        assert_abs_diff_eq!(poisson.density(3.0, &[4.0]).unwrap(), 0.1954, epsilon = 1e-4);
        assert_abs_diff_eq!(poisson.cumulative(3.0, &[4.0]).unwrap(), 0.4335, epsilon = 1e-4);

        let reference = statrs::distribution::Poisson::new(4.0).unwrap();
        for k in 0..30u64 {
            assert_relative_eq!(poisson.density(k as f64, &[4.0]).unwrap(), reference.pmf(k), epsilon = 1e-12);
            assert_abs_diff_eq!(poisson.cumulative(k as f64, &[4.0]).unwrap(), reference.cdf(k), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_binomial_against_statrs() {
        let binomial = Binomial::new();
        let reference = statrs::distribution::Binomial::new(0.3, 10).unwrap();
        for k in 0..=10u64 {
            assert_relative_eq!(binomial.density(k as f64, &[10.0, 0.3]).unwrap(), reference.pmf(k), epsilon = 1e-12);
            assert_abs_diff_eq!(binomial.cumulative(k as f64, &[10.0, 0.3]).unwrap(), reference.cdf(k), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_binomial_edge_probabilities() {
        let binomial = Binomial::new();
        assert_eq!(binomial.density(0.0, &[5.0, 0.0]).unwrap(), 1.0);
        assert_eq!(binomial.density(1.0, &[5.0, 0.0]).unwrap(), 0.0);
        assert_eq!(binomial.density(5.0, &[5.0, 1.0]).unwrap(), 1.0);
        assert_eq!(binomial.cumulative(0.0, &[5.0, 0.0]).unwrap(), 1.0);
        assert_eq!(binomial.cumulative(4.0, &[5.0, 1.0]).unwrap(), 0.0);
        // large n stays finite
        let mass = binomial.density(1000.0, &[2000.0, 0.5]).unwrap();
        assert!(mass.is_finite() && mass > 0.0);
    }

    #[test]
    fn test_closed_form_cdfs_match_summation() {
        let cases: Vec<(Box<dyn Distribution>, Vec<f64>, i64)> = vec![
            (Box::new(DiscreteUniform::new()), vec![2.0, 9.0], 2),
            (Box::new(Binomial::new()), vec![12.0, 0.35], 0),
            (Box::new(Poisson::new()), vec![3.5], 0),
            (Box::new(Geometric::new()), vec![0.25], 0),
            (Box::new(NegativeBinomial::new()), vec![4.0, 0.45], 0),
            (Box::new(GaussKuzmin::new()), vec![], 1),
            (Box::new(Planck::new()), vec![0.4], 0),
            (Box::new(Boltzmann::new()), vec![0.3, 6.0], 0),
        ];
        for (dist, args, lower) in cases {
            for k in lower..lower + 10 {
                let closed = dist.cumulative(k as f64, &args).unwrap();
                let summed = summed_cdf(dist.as_ref(), &args, lower, k).min(1.0);
                assert_abs_diff_eq!(closed, summed, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_validation_messages() {
        let binomial = Binomial::new();
        let err = binomial.density(2.0, &[5.0, 1.5]).unwrap_err();
        assert_eq!(err.to_string(), "p has to be <=1 but is 1.5");

        let err = binomial.density(2.0, &[5.5, 0.5]).unwrap_err();
        assert!(err.is_domain());

        let hypergeom = Hypergeometric::new();
        let err = hypergeom.cumulative(1.0, &[5.0, 6.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "R has to be <=N");
        let err = hypergeom.cumulative(1.0, &[5.0, 2.0, 6.0]).unwrap_err();
        assert_eq!(err.to_string(), "n has to be <=N");

        let neg = NegativeHypergeometric::new();
        let err = neg.random(&[10.0, 4.0, 5.0], &mut RandomSource::seeded(1)).unwrap_err();
        assert_eq!(err.to_string(), "n has to be <=R");

        let uniform = DiscreteUniform::new();
        assert_eq!(uniform.density(1.0, &[3.0, 2.0]).unwrap_err().to_string(), "b has to be >=a");
    }

    #[test]
    fn test_non_integer_points() {
        let poisson = Poisson::new();
        assert_eq!(poisson.density(2.5, &[3.0]).unwrap(), 0.0);
        assert_eq!(
            poisson.cumulative(2.5, &[3.0]).unwrap(),
            poisson.cumulative(2.0, &[3.0]).unwrap()
        );
    }

    #[test]
    fn test_zeta() {
        let zeta = Zeta::new();
        let z2 = std::f64::consts::PI.powi(2) / 6.0;
        assert_relative_eq!(zeta.density(1.0, &[2.0]).unwrap(), 1.0 / z2, epsilon = 1e-12);
        assert_relative_eq!(zeta.density(2.0, &[2.0]).unwrap(), 0.25 / z2, epsilon = 1e-12);
        // repeated evaluation hits the memoized normalizer
        assert_relative_eq!(zeta.density(1.0, &[2.0]).unwrap(), 1.0 / z2, epsilon = 1e-12);
        assert_eq!(zeta.density(3.0, &[1.0]).unwrap(), 0.0);

        let mut rng = RandomSource::seeded(5);
        assert_eq!(zeta.random(&[1.0], &mut rng).unwrap(), f64::INFINITY);

        // P(X = 1) = 1 / zeta(3)
        let n = 20_000;
        let ones = (0..n)
            .filter(|_| zeta.random(&[3.0], &mut rng).unwrap() == 1.0)
            .count();
        let expected = 1.0 / 1.202_056_903_159_594;
        assert_abs_diff_eq!(ones as f64 / n as f64, expected, epsilon = 0.015);
    }

    #[test]
    fn test_sampler_means() {
        assert_abs_diff_eq!(sample_mean(&DiscreteUniform::new(), &[1.0, 6.0], 20_000, 1), 3.5, epsilon = 0.05);
        assert_abs_diff_eq!(sample_mean(&Hypergeometric::new(), &[50.0, 20.0, 10.0], 20_000, 2), 4.0, epsilon = 0.05);
        assert_abs_diff_eq!(sample_mean(&Geometric::new(), &[0.25], 20_000, 3), 3.0, epsilon = 0.1);
        assert_abs_diff_eq!(sample_mean(&NegativeBinomial::new(), &[3.0, 0.5], 20_000, 4), 3.0, epsilon = 0.1);
        assert_abs_diff_eq!(sample_mean(&Bernoulli::new(), &[0.3], 20_000, 5), 0.3, epsilon = 0.015);
        assert_abs_diff_eq!(sample_mean(&Rademacher::new(), &[], 20_000, 6), 0.0, epsilon = 0.03);
        // Borel mean 1 / (1 - mu)
        assert_abs_diff_eq!(sample_mean(&Borel::new(), &[0.5], 20_000, 7), 2.0, epsilon = 0.1);
        // Planck mean 1 / (e^lambda - 1)
        let lambda: f64 = 0.5;
        assert_abs_diff_eq!(sample_mean(&Planck::new(), &[lambda], 20_000, 8), 1.0 / lambda.exp_m1(), epsilon = 0.06);
        // Logarithmic mean -p / ((1 - p) ln(1 - p))
        let p: f64 = 0.5;
        let expected = -p / ((1.0 - p) * (1.0 - p).ln());
        assert_abs_diff_eq!(sample_mean(&Logarithmic::new(), &[p], 20_000, 9), expected, epsilon = 0.05);
    }

    #[test]
    fn test_support_of_samples() {
        let mut rng = RandomSource::seeded(13);
        let neg = NegativeHypergeometric::new();
        let boltzmann = Boltzmann::new();
        let gauss_kuzmin = GaussKuzmin::new();
        for _ in 0..2_000 {
            let k = neg.random(&[20.0, 8.0, 3.0], &mut rng).unwrap();
            assert!((3.0..=15.0).contains(&k));
            let k = boltzmann.random(&[0.2, 5.0], &mut rng).unwrap();
            assert!((0.0..=4.0).contains(&k));
            let k = gauss_kuzmin.random(&[], &mut rng).unwrap();
            assert!(k >= 1.0 && k.fract() == 0.0);
        }
    }

    #[test]
    fn test_gauss_kuzmin_sampler_frequencies() {
        let dist = GaussKuzmin::new();
        let mut rng = RandomSource::seeded(21);
        let n = 20_000;
        let ones = (0..n)
            .filter(|_| dist.random(&[], &mut rng).unwrap() == 1.0)
            .count();
        assert_abs_diff_eq!(ones as f64 / n as f64, dist.density(1.0, &[]).unwrap(), epsilon = 0.015);
    }

    #[test]
    fn test_geometric_improper_limit() {
        let dist = Geometric::new();
        let mut rng = RandomSource::seeded(1);
        assert_eq!(dist.random(&[0.0], &mut rng).unwrap(), f64::INFINITY);
        assert_eq!(dist.random(&[1.0], &mut rng).unwrap(), 0.0);
        assert_eq!(dist.density(4.0, &[0.0]).unwrap(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_binomial_cdf_monotone(n in 1u32..60, p in 0.0f64..=1.0, k in 0u32..60) {
            let dist = Binomial::new();
            let args = [n as f64, p];
            let lo = dist.cumulative(k as f64, &args).unwrap();
            let hi = dist.cumulative(k as f64 + 1.0, &args).unwrap();
            prop_assert!((0.0..=1.0).contains(&lo));
            prop_assert!(hi + 1e-12 >= lo);
        }

        #[test]
        fn prop_poisson_cdf_monotone(lambda in 0.01f64..50.0, k in 0u32..100) {
            let dist = Poisson::new();
            let lo = dist.cumulative(k as f64, &[lambda]).unwrap();
            let hi = dist.cumulative(k as f64 + 1.0, &[lambda]).unwrap();
            prop_assert!((0.0..=1.0).contains(&lo));
            prop_assert!(hi + 1e-12 >= lo);
        }
    }
}
