//! Special functions used by the closed-form densities and CDFs
//!
//! Gamma, incomplete gamma/beta and the error function come from `statrs`.
//! The wrappers here only pin down behavior at the edges of the domain so
//! that callers never hit a panicking input.

use statrs::function::{beta, erf, factorial, gamma};
use std::f64::consts::SQRT_2;

/// Gamma function
pub fn gamma_fn(x: f64) -> f64 {
    gamma::gamma(x)
}

/// Natural logarithm of the gamma function
pub fn ln_gamma(x: f64) -> f64 {
    gamma::ln_gamma(x)
}

/// Regularized lower incomplete gamma function P(a, x), for `a > 0`
pub fn lower_regularized_gamma(a: f64, x: f64) -> f64 {
    if x.is_nan() || a.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    gamma::checked_gamma_lr(a, x).unwrap_or(f64::NAN)
}

/// Regularized upper incomplete gamma function Q(a, x), for `a > 0`
pub fn upper_regularized_gamma(a: f64, x: f64) -> f64 {
    if x.is_nan() || a.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0;
    }
    if x == f64::INFINITY {
        return 0.0;
    }
    gamma::checked_gamma_ur(a, x).unwrap_or(f64::NAN)
}

/// Natural logarithm of the beta function, for `a, b > 0`
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Regularized incomplete beta function I_x(a, b), for `a, b > 0`
pub fn regularized_beta(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    beta::checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
}

/// Error function
pub fn erf(x: f64) -> f64 {
    erf::erf(x)
}

/// Complementary error function
pub fn erfc(x: f64) -> f64 {
    erf::erfc(x)
}

/// Standard normal CDF Φ(x)
pub fn std_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal density φ(x)
pub fn std_normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// n! for a non-negative integer `n`
pub fn factorial(n: u64) -> f64 {
    factorial::factorial(n)
}

/// Binomial coefficient of integer arguments, zero outside `0 <= k <= n`
///
/// Arguments are rounded to the nearest integer first.
pub fn binom(n: f64, k: f64) -> f64 {
    let (n, k) = (n.round(), k.round());
    if n < 0.0 || k < 0.0 || k > n {
        return 0.0;
    }
    factorial::binomial(n as u64, k as u64)
}

/// ln C(n, k); negative infinity outside `0 <= k <= n`
pub fn ln_binom(n: f64, k: f64) -> f64 {
    let (n, k) = (n.round(), k.round());
    if n < 0.0 || k < 0.0 || k > n {
        return f64::NEG_INFINITY;
    }
    factorial::ln_binomial(n as u64, k as u64)
}

/// Riemann zeta function ζ(s) for real `s >= 1`
///
/// Euler-Maclaurin summation with ten explicit terms and six Bernoulli
/// corrections. ζ(1) is the divergent harmonic series and yields `+∞`.
pub fn riemann_zeta(s: f64) -> f64 {
    if s.is_nan() || s < 1.0 {
        return f64::NAN;
    }
    if s == 1.0 {
        return f64::INFINITY;
    }

    // B_2k / (2k)!
    const BERNOULLI_OVER_FACTORIAL: [f64; 6] = [
        1.0 / 6.0 / 2.0,
        -1.0 / 30.0 / 24.0,
        1.0 / 42.0 / 720.0,
        -1.0 / 30.0 / 40_320.0,
        5.0 / 66.0 / 3_628_800.0,
        -691.0 / 2730.0 / 479_001_600.0,
    ];
    const N: f64 = 10.0;

    let mut sum: f64 = (1..10).map(|n| (n as f64).powf(-s)).sum();
    sum += N.powf(1.0 - s) / (s - 1.0) + 0.5 * N.powf(-s);

    // rising product s (s+1) ... (s+2k-2)
    let mut rising = s;
    let mut power = N.powf(-s - 1.0);
    for (k, coefficient) in BERNOULLI_OVER_FACTORIAL.iter().enumerate() {
        sum += coefficient * rising * power;
        let j = 2.0 * k as f64;
        rising *= (s + j + 1.0) * (s + j + 2.0);
        power /= N * N;
    }
    sum
}
