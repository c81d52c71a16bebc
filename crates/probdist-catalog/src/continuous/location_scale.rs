//! Continuous distributions on the whole real line

use super::{point_mass_cdf, point_mass_pdf};
use probdist_core::prelude::*;
use probdist_core::special::{ln_gamma, regularized_beta, std_normal_cdf, std_normal_pdf};
use std::f64::consts::PI;

/// Euler-Mascheroni constant
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

distribution_type!(
    /// Normal distribution with mean `mu` and standard deviation `sigma`
    Normal => DistributionInfo::continuous("normal", "Normal distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("sigma").at_least(0.0))
);

impl Distribution for Normal {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if sigma == 0.0 {
            return point_mass_pdf(x, mu);
        }
        std_normal_pdf((x - mu) / sigma) / sigma
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if sigma == 0.0 {
            return point_mass_cdf(x, mu);
        }
        std_normal_cdf((x - mu) / sigma)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, sigma] = params.array();
        rng.gaussian(mu, sigma)
    }
}

distribution_type!(
    /// Cauchy distribution with location `t` and scale `s`
    Cauchy => DistributionInfo::continuous("cauchy", "Cauchy distribution")
        .with_parameter(ParameterDescriptor::continuous("t"))
        .with_parameter(ParameterDescriptor::continuous("s").greater_than(0.0))
);

impl Distribution for Cauchy {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [t, s] = params.array();
        s / (PI * (s * s + (x - t).powi(2)))
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [t, s] = params.array();
        0.5 + ((x - t) / s).atan() / PI
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [t, s] = params.array();
        let u = rng.uniform();
        if u == 0.0 {
            return f64::NEG_INFINITY;
        }
        t + s * (PI * (u - 0.5)).tan()
    }
}

distribution_type!(
    /// Gumbel (extreme value type I) distribution parameterized by mean and standard deviation
    Gumbel => DistributionInfo::continuous("gumbel", "Gumbel distribution")
        .with_parameter(ParameterDescriptor::continuous("mean"))
        .with_parameter(ParameterDescriptor::continuous("std").greater_than(0.0))
);

impl Gumbel {
    /// Location `mu` and scale `beta` from mean and standard deviation
    fn location_scale(mean: f64, std: f64) -> (f64, f64) {
        let beta = std * 6f64.sqrt() / PI;
        (mean - beta * EULER_GAMMA, beta)
    }
}

impl Distribution for Gumbel {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mean, std] = params.array();
        let (mu, beta) = Self::location_scale(mean, std);
        let z = (x - mu) / beta;
        (-z - (-z).exp()).exp() / beta
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mean, std] = params.array();
        let (mu, beta) = Self::location_scale(mean, std);
        let z = (x - mu) / beta;
        (-(-z).exp()).exp()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mean, std] = params.array();
        let (mu, beta) = Self::location_scale(mean, std);
        let u = 1.0 - rng.uniform();
        mu - beta * (-u.ln()).ln()
    }
}

distribution_type!(
    /// Hyperbolic secant distribution
    HyperbolicSecant => DistributionInfo::continuous("hyperbolicsecant", "Hyperbolic secant distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("sigma").greater_than(0.0))
);

impl Distribution for HyperbolicSecant {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        let z = (x - mu) / sigma;
        1.0 / (2.0 * sigma * (PI * z / 2.0).cosh())
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        let arg = PI * (x - mu) / sigma / 2.0;
        if arg >= 750.0 {
            return 1.0;
        }
        2.0 / PI * arg.exp().atan()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, sigma] = params.array();
        let u = rng.uniform();
        mu + 2.0 * sigma / PI * (PI * u / 2.0).tan().ln()
    }
}

distribution_type!(
    /// Johnson's SU distribution: `gamma + delta * asinh((x - xi) / lambda)` is standard normal
    JohnsonSU => DistributionInfo::continuous("johnsonsu", "Johnson SU distribution")
        .with_parameter(ParameterDescriptor::continuous("gamma").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("xi").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("delta").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for JohnsonSU {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [gamma, xi, delta, lambda] = params.array();
        let z = (x - xi) / lambda;
        delta / (lambda * (1.0 + z * z).sqrt()) * std_normal_pdf(gamma + delta * z.asinh())
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [gamma, xi, delta, lambda] = params.array();
        std_normal_cdf(gamma + delta * ((x - xi) / lambda).asinh())
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [gamma, xi, delta, lambda] = params.array();
        xi + lambda * ((rng.standard_normal() - gamma) / delta).sinh()
    }
}

distribution_type!(
    /// Laplace (double exponential) distribution
    Laplace => DistributionInfo::continuous("laplace", "Laplace distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("sigma").greater_than(0.0))
);

impl Distribution for Laplace {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        (-(x - mu).abs() / sigma).exp() / (2.0 * sigma)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        let tail = 0.5 * (-(x - mu).abs() / sigma).exp();
        if x < mu {
            tail
        } else {
            1.0 - tail
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, sigma] = params.array();
        let v = rng.uniform() - 0.5;
        mu - sigma * v.signum() * (1.0 - 2.0 * v.abs()).ln()
    }
}

distribution_type!(
    /// Logistic distribution
    Logistic => DistributionInfo::continuous("logistic", "Logistic distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("s").greater_than(0.0))
);

impl Distribution for Logistic {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, s] = params.array();
        // symmetric in z; exp(-|z|) cannot overflow
        let e = (-((x - mu) / s).abs()).exp();
        e / (s * (1.0 + e).powi(2))
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, s] = params.array();
        1.0 / (1.0 + (-(x - mu) / s).exp())
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, s] = params.array();
        let u = rng.uniform();
        mu + s * (u / (1.0 - u)).ln()
    }
}

distribution_type!(
    /// Student's t distribution with `nu` degrees of freedom, shifted by `mu`
    StudentT => DistributionInfo::continuous("studentt", "Student t distribution")
        .with_parameter(ParameterDescriptor::continuous("nu").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("mu"))
);

impl Distribution for StudentT {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [nu, mu] = params.array();
        let t = x - mu;
        let ln_factor = ln_gamma((nu + 1.0) / 2.0) - ln_gamma(nu / 2.0) - 0.5 * (nu * PI).ln();
        (ln_factor - (nu + 1.0) / 2.0 * (t * t / nu).ln_1p()).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [nu, mu] = params.array();
        let t = x - mu;
        let tail = 0.5 * regularized_beta(nu / (t * t + nu), nu / 2.0, 0.5);
        if t >= 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [nu, mu] = params.array();
        let z = rng.standard_normal();
        mu + z / (rng.chi_squared(nu) / nu).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use statrs::distribution::{Continuous, ContinuousCDF};

    fn integrate(dist: &dyn Distribution, args: &[f64], lo: f64, hi: f64) -> f64 {
        let steps = 40_000;
        let h = (hi - lo) / steps as f64;
        (0..steps)
            .map(|i| dist.density(lo + (i as f64 + 0.5) * h, args).unwrap() * h)
            .sum()
    }

    #[test]
    fn test_normalization() {
        let cases: Vec<(Box<dyn Distribution>, Vec<f64>, f64)> = vec![
            (Box::new(Normal::new()), vec![1.0, 2.0], 1e-6),
            (Box::new(Gumbel::new()), vec![0.0, 1.0], 1e-6),
            (Box::new(HyperbolicSecant::new()), vec![0.0, 1.0], 1e-6),
            (Box::new(JohnsonSU::new()), vec![1.0, 1.0, 2.0, 1.0], 1e-6),
            (Box::new(Laplace::new()), vec![0.5, 1.5], 1e-6),
            (Box::new(Logistic::new()), vec![0.0, 1.0], 1e-6),
            (Box::new(StudentT::new()), vec![5.0, 0.0], 1e-4),
            // heavy tails lose mass outside the integration window
            (Box::new(Cauchy::new()), vec![0.0, 1.0], 4e-3),
        ];
        for (dist, args, tolerance) in cases {
            let total = integrate(dist.as_ref(), &args, -200.0, 200.0);
            assert_abs_diff_eq!(total, 1.0, epsilon = tolerance);
        }
    }

    #[test]
    fn test_normal_reference_values() {
        let normal = Normal::new();
        assert_eq!(normal.cumulative(0.0, &[0.0, 1.0]).unwrap(), 0.5);
        let reference = statrs::distribution::Normal::new(1.0, 2.0).unwrap();
        for &x in &[-5.0, -1.0, 0.0, 0.5, 3.0, 8.0] {
            assert_relative_eq!(normal.density(x, &[1.0, 2.0]).unwrap(), reference.pdf(x), epsilon = 1e-14);
            assert_abs_diff_eq!(normal.cumulative(x, &[1.0, 2.0]).unwrap(), reference.cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normal_degenerate() {
        let normal = Normal::new();
        assert_eq!(normal.density(2.0, &[2.0, 0.0]).unwrap(), f64::INFINITY);
        assert_eq!(normal.density(2.5, &[2.0, 0.0]).unwrap(), 0.0);
        assert_eq!(normal.cumulative(1.9, &[2.0, 0.0]).unwrap(), 0.0);
        assert_eq!(normal.cumulative(2.0, &[2.0, 0.0]).unwrap(), 1.0);
        assert_eq!(normal.random(&[2.0, 0.0], &mut RandomSource::seeded(1)).unwrap(), 2.0);
    }

    #[test]
    fn test_normal_arity_and_domain() {
        let normal = Normal::new();
        let err = normal.density(0.0, &[]).unwrap_err();
        assert_eq!(err.to_string(), "2 parameters expected but 0 given.");
        let err = normal.density(0.0, &[0.0, -1.0]).unwrap_err();
        assert_eq!(err.to_string(), "sigma has to be >=0 but is -1");
    }

    #[test]
    fn test_student_t_against_statrs() {
        let dist = StudentT::new();
        let reference = statrs::distribution::StudentsT::new(0.5, 1.0, 3.5).unwrap();
        for &x in &[-4.0, -1.0, 0.5, 1.0, 2.5, 10.0] {
            assert_relative_eq!(dist.density(x, &[3.5, 0.5]).unwrap(), reference.pdf(x), epsilon = 1e-12);
            assert_abs_diff_eq!(dist.cumulative(x, &[3.5, 0.5]).unwrap(), reference.cdf(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_gumbel_moments() {
        let dist = Gumbel::new();
        let mut rng = RandomSource::seeded(8);
        let n = 40_000;
        let samples: Vec<f64> = (0..n).map(|_| dist.random(&[3.0, 2.0], &mut rng).unwrap()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert_abs_diff_eq!(mean, 3.0, epsilon = 0.05);
        assert_abs_diff_eq!(var.sqrt(), 2.0, epsilon = 0.05);
    }

    #[test]
    fn test_logistic_extreme_arguments() {
        let dist = Logistic::new();
        assert_eq!(dist.density(-1e6, &[0.0, 1.0]).unwrap(), 0.0);
        assert_eq!(dist.density(1e6, &[0.0, 1.0]).unwrap(), 0.0);
        assert_abs_diff_eq!(dist.density(0.0, &[0.0, 1.0]).unwrap(), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_samplers_follow_cdf() {
        let cases: Vec<(Box<dyn Distribution>, Vec<f64>)> = vec![
            (Box::new(Normal::new()), vec![-2.0, 3.0]),
            (Box::new(Cauchy::new()), vec![1.0, 0.5]),
            (Box::new(Gumbel::new()), vec![0.0, 1.0]),
            (Box::new(HyperbolicSecant::new()), vec![1.0, 2.0]),
            (Box::new(JohnsonSU::new()), vec![1.0, 1.0, 2.0, 1.0]),
            (Box::new(Laplace::new()), vec![0.0, 1.0]),
            (Box::new(Logistic::new()), vec![2.0, 0.5]),
            (Box::new(StudentT::new()), vec![3.0, 1.0]),
        ];
        let mut rng = RandomSource::seeded(99);
        let n = 4_000;
        for (dist, args) in cases {
            let samples: Vec<f64> = (0..n).map(|_| dist.random(&args, &mut rng).unwrap()).collect();
            for &q in &[0.25, 0.5, 0.75] {
                let below = samples
                    .iter()
                    .filter(|&&x| dist.cumulative(x, &args).unwrap() <= q)
                    .count();
                assert_abs_diff_eq!(below as f64 / n as f64, q, epsilon = 0.04);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_student_t_cdf_monotone(nu in 0.1f64..50.0, x in -50.0f64..50.0, dx in 0.0f64..5.0) {
            let dist = StudentT::new();
            let lo = dist.cumulative(x, &[nu, 0.0]).unwrap();
            let hi = dist.cumulative(x + dx, &[nu, 0.0]).unwrap();
            prop_assert!((0.0..=1.0).contains(&lo));
            prop_assert!(hi + 1e-12 >= lo);
        }

        #[test]
        fn prop_normal_cdf_symmetric(mu in -10.0f64..10.0, sigma in 0.01f64..10.0, d in 0.0f64..20.0) {
            let dist = Normal::new();
            let left = dist.cumulative(mu - d, &[mu, sigma]).unwrap();
            let right = dist.cumulative(mu + d, &[mu, sigma]).unwrap();
            prop_assert!((left + right - 1.0).abs() < 1e-12);
        }
    }
}
