//! Continuous distributions on a half-line
//!
//! Waiting times, sizes and other positive quantities. Densities with
//! gamma-function normalizers are evaluated in log space so that large
//! shape parameters do not overflow.

use super::{point_mass_cdf, point_mass_pdf};
use probdist_core::prelude::*;
use probdist_core::special::{
    erf, erfc, ln_beta, ln_gamma, lower_regularized_gamma, regularized_beta, std_normal_cdf,
    std_normal_pdf, upper_regularized_gamma,
};
use std::f64::consts::{FRAC_2_PI, LN_2, PI, SQRT_2};

/// Density of a gamma law with the given shape and scale, for `x > 0`
fn gamma_pdf(shape: f64, scale: f64, x: f64) -> f64 {
    ((shape - 1.0) * x.ln() - x / scale - shape * scale.ln() - ln_gamma(shape)).exp()
}

/// `ln Φ(-z)` for `z >= 0`, switching to the asymptotic series once
/// `erfc` underflows
fn ln_std_normal_tail(z: f64) -> f64 {
    if z < 30.0 {
        return (0.5 * erfc(z / SQRT_2)).ln();
    }
    let z2 = z * z;
    -z2 / 2.0 - (z * (2.0 * PI).sqrt()).ln() + (1.0 - 1.0 / z2 + 3.0 / (z2 * z2)).ln()
}

distribution_type!(
    /// Exponential distribution with rate `lambda`
    Exponential => DistributionInfo::continuous("exp", "Exponential distribution")
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for Exponential {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [lambda] = params.array();
        if x < 0.0 {
            0.0
        } else {
            lambda * (-lambda * x).exp()
        }
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [lambda] = params.array();
        if x < 0.0 {
            0.0
        } else {
            -(-lambda * x).exp_m1()
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [lambda] = params.array();
        -(-rng.uniform()).ln_1p() / lambda
    }
}

distribution_type!(
    /// Log-normal distribution parameterized by its own mean and standard deviation
    ///
    /// With `std == 0` the law is a point mass at `mean`.
    LogNormal => DistributionInfo::continuous("lognormal", "Log-normal distribution")
        .with_parameter(ParameterDescriptor::continuous("mean").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("std").at_least(0.0))
);

impl LogNormal {
    /// Location and scale of the underlying normal law
    fn log_parameters(mean: f64, std: f64) -> (f64, f64) {
        let sigma2 = ((std / mean).powi(2)).ln_1p();
        (mean.ln() - sigma2 / 2.0, sigma2.sqrt())
    }
}

impl Distribution for LogNormal {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mean, std] = params.array();
        if std == 0.0 {
            return point_mass_pdf(x, mean);
        }
        if x <= 0.0 {
            return 0.0;
        }
        let (mu, sigma) = Self::log_parameters(mean, std);
        std_normal_pdf((x.ln() - mu) / sigma) / (sigma * x)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mean, std] = params.array();
        if std == 0.0 {
            return point_mass_cdf(x, mean);
        }
        if x <= 0.0 {
            return 0.0;
        }
        let (mu, sigma) = Self::log_parameters(mean, std);
        std_normal_cdf((x.ln() - mu) / sigma)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mean, std] = params.array();
        if std == 0.0 {
            return mean;
        }
        let (mu, sigma) = Self::log_parameters(mean, std);
        rng.gaussian(mu, sigma).exp()
    }
}

distribution_type!(
    /// Chi distribution with `k` degrees of freedom
    Chi => DistributionInfo::continuous("chi", "Chi distribution")
        .with_parameter(ParameterDescriptor::integer("k").at_least(1.0))
);

impl Distribution for Chi {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [k] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        let half = k / 2.0;
        ((k - 1.0) * x.ln() - x * x / 2.0 - (half - 1.0) * LN_2 - ln_gamma(half)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [k] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        lower_regularized_gamma(k / 2.0, x * x / 2.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [k] = params.array();
        rng.chi_squared(k).sqrt()
    }
}

distribution_type!(
    /// Chi-squared distribution with `k` degrees of freedom
    ChiSquared => DistributionInfo::continuous("chisquared", "Chi-squared distribution")
        .with_parameter(ParameterDescriptor::integer("k").at_least(1.0))
);

impl Distribution for ChiSquared {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [k] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        gamma_pdf(k / 2.0, 2.0, x)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [k] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        lower_regularized_gamma(k / 2.0, x / 2.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [k] = params.array();
        rng.chi_squared(k)
    }
}

distribution_type!(
    /// Erlang distribution: `n` exponential phases with mean `lambda` each
    Erlang => DistributionInfo::continuous("erlang", "Erlang distribution")
        .with_parameter(ParameterDescriptor::integer("n").at_least(1.0))
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for Erlang {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [n, lambda] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        gamma_pdf(n, lambda, x)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [n, lambda] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        lower_regularized_gamma(n, x / lambda)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [n, lambda] = params.array();
        lambda * rng.standard_gamma(n)
    }
}

distribution_type!(
    /// Fisher-Snedecor F distribution
    FisherF => DistributionInfo::continuous("f", "F distribution")
        .with_parameter(ParameterDescriptor::continuous("m").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("n").greater_than(0.0))
);

impl Distribution for FisherF {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m, n] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        let ln_density = (m / 2.0) * m.ln() + (n / 2.0) * n.ln() + (m / 2.0 - 1.0) * x.ln()
            - ((m + n) / 2.0) * (m * x + n).ln()
            - ln_beta(m / 2.0, n / 2.0);
        ln_density.exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m, n] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        regularized_beta(m * x / (m * x + n), m / 2.0, n / 2.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [m, n] = params.array();
        (rng.chi_squared(m) / m) / (rng.chi_squared(n) / n)
    }
}

distribution_type!(
    /// Gamma distribution with shape `alpha` and scale `beta`
    Gamma => DistributionInfo::continuous("gamma", "Gamma distribution")
        .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
);

impl Distribution for Gamma {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        gamma_pdf(alpha, beta, x)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        lower_regularized_gamma(alpha, x / beta)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [alpha, beta] = params.array();
        beta * rng.standard_gamma(alpha)
    }
}

distribution_type!(
    /// Half-normal distribution starting at `s` with mean excess `mu`
    HalfNormal => DistributionInfo::continuous("halfnormal", "Half-normal distribution")
        .with_parameter(ParameterDescriptor::continuous("s"))
        .with_parameter(ParameterDescriptor::continuous("mu").greater_than(0.0))
);

impl Distribution for HalfNormal {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [s, mu] = params.array();
        if x < s {
            return 0.0;
        }
        let theta = 1.0 / mu;
        2.0 * theta / PI * (-(x - s).powi(2) * theta * theta / PI).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [s, mu] = params.array();
        if x < s {
            return 0.0;
        }
        erf((x - s) / (mu * PI.sqrt()))
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [s, mu] = params.array();
        s + rng.standard_normal().abs() * mu * (PI / 2.0).sqrt()
    }
}

distribution_type!(
    /// Inverse Gaussian (Wald) distribution with shape `lambda` and mean `mu`
    InverseGaussian => DistributionInfo::continuous("inversegaussian", "Inverse Gaussian distribution")
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("mu").greater_than(0.0))
);

impl Distribution for InverseGaussian {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [lambda, mu] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        (lambda / (2.0 * PI * x.powi(3))).sqrt()
            * (-lambda * (x - mu).powi(2) / (2.0 * mu * mu * x)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [lambda, mu] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        let r = (lambda / x).sqrt();
        // exp(2λ/μ) overflows long before the product does
        let correction = (2.0 * lambda / mu + ln_std_normal_tail(r * (x / mu + 1.0))).exp();
        std_normal_cdf(r * (x / mu - 1.0)) + correction
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [lambda, mu] = params.array();
        let y = rng.standard_normal().powi(2);
        let x = mu + mu * mu * y / (2.0 * lambda)
            - mu / (2.0 * lambda) * (4.0 * mu * lambda * y + (mu * y).powi(2)).sqrt();
        if rng.uniform() <= mu / (mu + x) {
            x
        } else {
            mu * mu / x
        }
    }
}

distribution_type!(
    /// Lévy distribution with location `mu` and scale `gamma`
    Levy => DistributionInfo::continuous("levy", "Lévy distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("gamma").greater_than(0.0))
);

impl Distribution for Levy {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, gamma] = params.array();
        if x <= mu {
            return 0.0;
        }
        let d = x - mu;
        (gamma / (2.0 * PI)).sqrt() * (-gamma / (2.0 * d)).exp() / d.powf(1.5)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, gamma] = params.array();
        if x <= mu {
            return 0.0;
        }
        erfc((gamma / (2.0 * (x - mu))).sqrt())
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, gamma] = params.array();
        mu + gamma / rng.standard_normal().powi(2)
    }
}

distribution_type!(
    /// Log-logistic distribution with scale `alpha` and shape `beta`
    LogLogistic => DistributionInfo::continuous("loglogistic", "Log-logistic distribution")
        .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
);

impl Distribution for LogLogistic {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        let z = x / alpha;
        (beta / alpha) * z.powf(beta - 1.0) / (1.0 + z.powf(beta)).powi(2)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        1.0 / (1.0 + (x / alpha).powf(-beta))
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [alpha, beta] = params.array();
        let u = rng.uniform();
        alpha * (u / (1.0 - u)).powf(1.0 / beta)
    }
}

distribution_type!(
    /// Maxwell-Boltzmann distribution with scale `a`
    MaxwellBoltzmann => DistributionInfo::continuous("maxwellboltzmann", "Maxwell-Boltzmann distribution")
        .with_parameter(ParameterDescriptor::continuous("a").greater_than(0.0))
);

impl Distribution for MaxwellBoltzmann {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        let x2 = x * x;
        FRAC_2_PI.sqrt() / a.powi(3) * x2 * (-x2 / (2.0 * a * a)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        erf(x / (SQRT_2 * a)) - FRAC_2_PI.sqrt() * x / a * (-x * x / (2.0 * a * a)).exp()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a] = params.array();
        let sum: f64 = (0..3).map(|_| rng.standard_normal().powi(2)).sum();
        a * sum.sqrt()
    }
}

distribution_type!(
    /// Pareto distribution with minimum `xm` and tail index `alpha`
    Pareto => DistributionInfo::continuous("pareto", "Pareto distribution")
        .with_parameter(ParameterDescriptor::continuous("xm").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
);

impl Distribution for Pareto {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [xm, alpha] = params.array();
        if x < xm {
            return 0.0;
        }
        alpha / x * (xm / x).powf(alpha)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [xm, alpha] = params.array();
        if x < xm {
            return 0.0;
        }
        1.0 - (xm / x).powf(alpha)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [xm, alpha] = params.array();
        xm / (1.0 - rng.uniform()).powf(1.0 / alpha)
    }
}

distribution_type!(
    /// Weibull distribution with shape `beta` and rate `lambda`
    Weibull => DistributionInfo::continuous("weibull", "Weibull distribution")
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0))
);

impl Distribution for Weibull {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [beta, lambda] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        let z = lambda * x;
        lambda * beta * z.powf(beta - 1.0) * (-z.powf(beta)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [beta, lambda] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        -(-(lambda * x).powf(beta)).exp_m1()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [beta, lambda] = params.array();
        (-(-rng.uniform()).ln_1p()).powf(1.0 / beta) / lambda
    }
}

distribution_type!(
    /// Birnbaum-Saunders fatigue life distribution
    FatigueLife => DistributionInfo::continuous("fatiguelife", "Fatigue life distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("gamma").greater_than(0.0))
);

impl Distribution for FatigueLife {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, beta, gamma] = params.array();
        if x <= mu {
            return 0.0;
        }
        let root = ((x - mu) / beta).sqrt();
        let inverse_root = 1.0 / root;
        (root + inverse_root) / (2.0 * gamma * (x - mu))
            * std_normal_pdf((root - inverse_root) / gamma)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, beta, gamma] = params.array();
        if x <= mu {
            return 0.0;
        }
        let root = ((x - mu) / beta).sqrt();
        std_normal_cdf((root - 1.0 / root) / gamma)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, beta, gamma] = params.array();
        let w = gamma * rng.standard_normal() / 2.0;
        mu + beta * (w + (w * w + 1.0).sqrt()).powi(2)
    }
}

distribution_type!(
    /// Fréchet (extreme value type II) distribution
    Frechet => DistributionInfo::continuous("frechet", "Fréchet distribution")
        .with_parameter(ParameterDescriptor::continuous("delta"))
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
);

impl Distribution for Frechet {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [delta, beta, alpha] = params.array();
        if x <= delta {
            return 0.0;
        }
        let z = (x - delta) / beta;
        alpha / beta * z.powf(-alpha - 1.0) * (-z.powf(-alpha)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [delta, beta, alpha] = params.array();
        if x <= delta {
            return 0.0;
        }
        let z = (x - delta) / beta;
        (-z.powf(-alpha)).exp()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [delta, beta, alpha] = params.array();
        let u = 1.0 - rng.uniform();
        delta + beta * (-u.ln()).powf(-1.0 / alpha)
    }
}

distribution_type!(
    /// Log-Cauchy distribution
    LogCauchy => DistributionInfo::continuous("logcauchy", "Log-Cauchy distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("sigma").greater_than(0.0))
);

impl Distribution for LogCauchy {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        sigma / (PI * x * ((x.ln() - mu).powi(2) + sigma * sigma))
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        ((x.ln() - mu) / sigma).atan() / PI + 0.5
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, sigma] = params.array();
        let u = rng.uniform();
        (mu + sigma * ((u - 0.5) * PI).tan()).exp()
    }
}

distribution_type!(
    /// Rayleigh distribution parameterized by its mean `m`
    Rayleigh => DistributionInfo::continuous("rayleigh", "Rayleigh distribution")
        .with_parameter(ParameterDescriptor::continuous("m").greater_than(0.0))
);

impl Rayleigh {
    fn sigma(m: f64) -> f64 {
        FRAC_2_PI.sqrt() * m
    }
}

impl Distribution for Rayleigh {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        let sigma2 = Self::sigma(m).powi(2);
        x / sigma2 * (-x * x / (2.0 * sigma2)).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        let sigma2 = Self::sigma(m).powi(2);
        -(-x * x / (2.0 * sigma2)).exp_m1()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [m] = params.array();
        Self::sigma(m) * (-2.0 * (-rng.uniform()).ln_1p()).sqrt()
    }
}

distribution_type!(
    /// Log-gamma distribution: `ln X` is gamma distributed with shape `a` and rate `b`
    LogGamma => DistributionInfo::continuous("loggamma", "Log-gamma distribution")
        .with_parameter(ParameterDescriptor::continuous("a").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("b").greater_than(0.0))
);

impl Distribution for LogGamma {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < 1.0 {
            return 0.0;
        }
        // powf keeps 0^0 == 1 at x == 1 for a == 1
        (a * b.ln() - ln_gamma(a) - (b + 1.0) * x.ln()).exp() * x.ln().powf(a - 1.0)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < 1.0 {
            return 0.0;
        }
        lower_regularized_gamma(a, b * x.ln())
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        (rng.standard_gamma(a) / b).exp()
    }
}

distribution_type!(
    /// Inverse gamma distribution with shape `alpha` and scale `beta`
    InverseGamma => DistributionInfo::continuous("invgamma", "Inverse gamma distribution")
        .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
);

impl Distribution for InverseGamma {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        (alpha * beta.ln() - ln_gamma(alpha) - (alpha + 1.0) * x.ln() - beta / x).exp()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta] = params.array();
        if x <= 0.0 {
            return 0.0;
        }
        upper_regularized_gamma(alpha, beta / x)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [alpha, beta] = params.array();
        beta / rng.standard_gamma(alpha)
    }
}

distribution_type!(
    /// Half-Cauchy distribution starting at `mu`
    HalfCauchy => DistributionInfo::continuous("halfcauchy", "Half-Cauchy distribution")
        .with_parameter(ParameterDescriptor::continuous("mu"))
        .with_parameter(ParameterDescriptor::continuous("sigma").greater_than(0.0))
);

impl Distribution for HalfCauchy {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if x < mu {
            return 0.0;
        }
        FRAC_2_PI / sigma / (1.0 + ((x - mu) / sigma).powi(2))
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [mu, sigma] = params.array();
        if x < mu {
            return 0.0;
        }
        FRAC_2_PI * ((x - mu) / sigma).atan()
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [mu, sigma] = params.array();
        mu + sigma * (PI * rng.uniform() / 2.0).tan()
    }
}

distribution_type!(
    /// Log-Laplace distribution with shape `c`, shifted by `s`
    LogLaplace => DistributionInfo::continuous("loglaplace", "Log-Laplace distribution")
        .with_parameter(ParameterDescriptor::continuous("c").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("s"))
);

impl Distribution for LogLaplace {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [c, s] = params.array();
        let x = x - s;
        if x <= 0.0 {
            0.0
        } else if x < 1.0 {
            c / 2.0 * x.powf(c - 1.0)
        } else {
            c / 2.0 * x.powf(-c - 1.0)
        }
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [c, s] = params.array();
        let x = x - s;
        if x <= 0.0 {
            0.0
        } else if x < 1.0 {
            0.5 * x.powf(c)
        } else {
            1.0 - 0.5 * x.powf(-c)
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [c, s] = params.array();
        let u = rng.uniform();
        let x = if u < 0.5 {
            (2.0 * u).powf(1.0 / c)
        } else {
            (2.0 * (1.0 - u)).powf(-1.0 / c)
        };
        s + x
    }
}
