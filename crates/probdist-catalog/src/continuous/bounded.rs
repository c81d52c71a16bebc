//! Continuous distributions on a finite interval
//!
//! Most of these take the interval ends `a <= b` as parameters. When
//! `a == b` the law degenerates to a point mass at `a`: the density is
//! `+∞` there and the CDF jumps from 0 to 1.

use super::{ensure_ordered, point_mass_cdf, point_mass_pdf};
use probdist_core::prelude::*;
use probdist_core::special::{binom, factorial, ln_beta, regularized_beta};
use std::f64::consts::PI;

distribution_type!(
    /// Continuous uniform distribution on `[a, b]`
    Uniform => DistributionInfo::continuous("uniform", "Continuous uniform distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Uniform {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < a || x > b {
            0.0
        } else {
            1.0 / (b - a)
        }
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        if x < a {
            0.0
        } else if x > b {
            1.0
        } else {
            (x - a) / (b - a)
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        a + (b - a) * rng.uniform()
    }
}

distribution_type!(
    /// Arcsine distribution on `[a, b]`
    Arcsine => DistributionInfo::continuous("arcsine", "Arcsine distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Arcsine {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        if a > b {
            return Err(Error::relation("a", "<=", "b"));
        }
        Ok(())
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        let z = (x - a) / (b - a);
        if z <= 0.0 || z >= 1.0 {
            return 0.0;
        }
        1.0 / (PI * (z * (1.0 - z)).sqrt()) / (b - a)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        let z = (x - a) / (b - a);
        if z <= 0.0 {
            0.0
        } else if z >= 1.0 {
            1.0
        } else {
            2.0 / PI * z.sqrt().asin()
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        let z = (PI * rng.uniform() / 2.0).sin().powi(2);
        a + (b - a) * z
    }
}

/// Beta distribution with shapes `alpha`, `beta`, rescaled to `[a, b]`
///
/// `1 / B(alpha, beta)` is memoized on the shape pair.
#[derive(Debug, Clone)]
pub struct Beta {
    info: DistributionInfo,
    inverse_beta_fn: MemoCache<(f64, f64)>,
}

impl Beta {
    pub fn new() -> Self {
        Self {
            info: DistributionInfo::continuous("beta", "Beta distribution")
                .with_parameter(ParameterDescriptor::continuous("alpha").greater_than(0.0))
                .with_parameter(ParameterDescriptor::continuous("beta").greater_than(0.0))
                .with_parameter(ParameterDescriptor::continuous("a"))
                .with_parameter(ParameterDescriptor::continuous("b")),
            inverse_beta_fn: MemoCache::new(),
        }
    }
}

impl Default for Beta {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution for Beta {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [_, _, a, b] = params.array();
        if a > b {
            return Err(Error::relation("a", "<=", "b"));
        }
        Ok(())
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta, a, b] = params.array();
        if x < a || x > b {
            return 0.0;
        }
        if a == b {
            return point_mass_pdf(x, a);
        }
        let factor = self
            .inverse_beta_fn
            .get_or_compute((alpha, beta), || (-ln_beta(alpha, beta)).exp());
        let z = (x - a) / (b - a);
        z.powf(alpha - 1.0) * (1.0 - z).powf(beta - 1.0) * factor / (b - a)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [alpha, beta, a, b] = params.array();
        if x < a {
            return 0.0;
        }
        if x > b {
            return 1.0;
        }
        if a == b {
            return point_mass_cdf(x, a);
        }
        regularized_beta((x - a) / (b - a), alpha, beta)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [alpha, beta, a, b] = params.array();
        a + (b - a) * rng.beta(alpha, beta)
    }
}

distribution_type!(
    /// Sum of `n` independent standard uniform variables
    IrwinHall => DistributionInfo::continuous("irwinhall", "Irwin-Hall distribution")
        .with_parameter(ParameterDescriptor::integer("n").at_least(1.0).at_most(25.0))
);

impl IrwinHall {
    /// `sum_{k=0}^{floor(x)} (-1)^k C(n, k) (x - k)^power`
    fn alternating_sum(n: f64, x: f64, power: i32) -> f64 {
        (0..=x.floor() as u32)
            .map(|k| {
                let k = f64::from(k);
                let sign = if k % 2.0 == 0.0 { 1.0 } else { -1.0 };
                sign * binom(n, k) * (x - k).powi(power)
            })
            .sum()
    }
}

impl Distribution for IrwinHall {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [n] = params.array();
        if x < 0.0 || x > n {
            return 0.0;
        }
        Self::alternating_sum(n, x, n as i32 - 1) / factorial(n as u64 - 1)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [n] = params.array();
        if x < 0.0 {
            return 0.0;
        }
        if x > n {
            return 1.0;
        }
        Self::alternating_sum(n, x, n as i32) / factorial(n as u64)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [n] = params.array();
        (0..n as u32).map(|_| rng.uniform()).sum()
    }
}

distribution_type!(
    /// Kumaraswamy distribution on `[0, 1]`
    Kumaraswamy => DistributionInfo::continuous("kumaraswamy", "Kumaraswamy distribution")
        .with_parameter(ParameterDescriptor::continuous("a").greater_than(0.0))
        .with_parameter(ParameterDescriptor::continuous("b").greater_than(0.0))
);

impl Distribution for Kumaraswamy {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x <= 0.0 || x >= 1.0 {
            return 0.0;
        }
        a * b * x.powf(a - 1.0) * (1.0 - x.powf(a)).powf(b - 1.0)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            1.0 - (1.0 - x.powf(a)).powf(b)
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        let u = rng.uniform();
        (1.0 - (1.0 - u).powf(1.0 / b)).powf(1.0 / a)
    }
}

distribution_type!(
    /// PERT distribution: a rescaled beta law with minimum `a`, mode `b`, maximum `c`
    Pert => DistributionInfo::continuous("pert", "PERT distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
        .with_parameter(ParameterDescriptor::continuous("c"))
);

impl Pert {
    fn shapes(a: f64, b: f64, c: f64) -> (f64, f64) {
        let alpha = 1.0 + 4.0 * (b - a) / (c - a);
        let beta = 1.0 + 4.0 * (c - b) / (c - a);
        (alpha, beta)
    }
}

impl Distribution for Pert {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b, c] = params.array();
        ensure_ordered("a", a, "b", b)?;
        ensure_ordered("b", b, "c", c)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c] = params.array();
        if x < a || x > c {
            return 0.0;
        }
        if a == c {
            return point_mass_pdf(x, a);
        }
        let (alpha, beta) = Self::shapes(a, b, c);
        let ln_factor = -ln_beta(alpha, beta) - (alpha + beta - 1.0) * (c - a).ln();
        ln_factor.exp() * (x - a).powf(alpha - 1.0) * (c - x).powf(beta - 1.0)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c] = params.array();
        if x < a {
            return 0.0;
        }
        if x > c {
            return 1.0;
        }
        if a == c {
            return point_mass_cdf(x, a);
        }
        let (alpha, beta) = Self::shapes(a, b, c);
        regularized_beta((x - a) / (c - a), alpha, beta)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b, c] = params.array();
        if a == c {
            return a;
        }
        let (alpha, beta) = Self::shapes(a, b, c);
        a + (c - a) * rng.beta(alpha, beta)
    }
}

distribution_type!(
    /// Reciprocal (log-uniform) distribution on `[a, b]`, `a > 0`
    Reciprocal => DistributionInfo::continuous("reciprocal", "Reciprocal distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Reciprocal {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)?;
        if a <= 0.0 {
            return Err(Error::below_minimum("a", 0.0, false, a));
        }
        Ok(())
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < a || x > b {
            return 0.0;
        }
        1.0 / (x * (b / a).ln())
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        if x < a {
            0.0
        } else if x > b {
            1.0
        } else {
            (x / a).ln() / (b / a).ln()
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        a * (rng.uniform() * (b / a).ln()).exp()
    }
}

distribution_type!(
    /// Sine distribution on `[a, b]`
    Sine => DistributionInfo::continuous("sine", "Sine distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Sine {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        let z = (x - a) / (b - a);
        if z <= 0.0 || z >= 1.0 {
            return 0.0;
        }
        PI / 2.0 * (PI * z).sin() / (b - a)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        let z = (x - a) / (b - a);
        if z <= 0.0 {
            0.0
        } else if z >= 1.0 {
            1.0
        } else {
            0.5 * (1.0 - (PI * z).cos())
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        let z = (1.0 - 2.0 * rng.uniform()).acos() / PI;
        a + (b - a) * z
    }
}

distribution_type!(
    /// Trapezoidal distribution rising on `[a, b]`, flat on `[b, c]`, falling on `[c, d]`
    Trapezoid => DistributionInfo::continuous("trapezoid", "Trapezoidal distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
        .with_parameter(ParameterDescriptor::continuous("c"))
        .with_parameter(ParameterDescriptor::continuous("d"))
);

impl Distribution for Trapezoid {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b, c, d] = params.array();
        ensure_ordered("a", a, "b", b)?;
        ensure_ordered("b", b, "c", c)?;
        ensure_ordered("c", c, "d", d)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c, d] = params.array();
        // degenerate case first, the open-interval test below would hide it
        if a == d {
            return point_mass_pdf(x, a);
        }
        if x <= a || x >= d {
            return 0.0;
        }
        let h = 2.0 / (c + d - a - b);
        if x < b {
            h * (x - a) / (b - a)
        } else if x > c {
            h * (d - x) / (d - c)
        } else {
            h
        }
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c, d] = params.array();
        if a == d {
            return point_mass_cdf(x, a);
        }
        if x <= a {
            return 0.0;
        }
        if x >= d {
            return 1.0;
        }
        let h = 2.0 / (c + d - a - b);
        if x < b {
            h * (x - a).powi(2) / (b - a) / 2.0
        } else if x > c {
            1.0 - h * (d - x).powi(2) / (d - c) / 2.0
        } else {
            h * (2.0 * x - a - b) / 2.0
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b, c, d] = params.array();
        let u = rng.uniform();
        if a == d {
            return a;
        }

        let h = 2.0 / (c + d - a - b);
        let mass_left = (b - a) * h / 2.0;
        let mass_right_start = 1.0 - (d - c) * h / 2.0;

        if u < mass_left {
            return a + (2.0 * u * (b - a) / h).sqrt();
        }
        if u > mass_right_start {
            return d - (2.0 * (1.0 - u) * (d - c) / h).sqrt();
        }
        if b == c {
            return b;
        }
        b + (c - b) * (u - mass_left) / (mass_right_start - mass_left)
    }
}

distribution_type!(
    /// Triangular distribution with minimum `a`, mode `c` and maximum `b`
    Triangular => DistributionInfo::continuous("triangular", "Triangular distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("c"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Triangular {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, c, b] = params.array();
        ensure_ordered("a", a, "c", c)?;
        ensure_ordered("c", c, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, c, b] = params.array();
        if x < a || x > b {
            return 0.0;
        }
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x > c {
            2.0 * (b - x) / ((b - a) * (b - c))
        } else {
            2.0 / (b - a)
        }
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, c, b] = params.array();
        if x < a {
            return 0.0;
        }
        if a == b || x >= b {
            return 1.0;
        }
        if x < c {
            (x - a).powi(2) / ((b - a) * (c - a))
        } else {
            1.0 - (b - x).powi(2) / ((b - a) * (b - c))
        }
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, c, b] = params.array();
        let u = rng.uniform();
        if a == b {
            return a;
        }
        if u <= (c - a) / (b - a) {
            a + (u * (b - a) * (c - a)).sqrt()
        } else {
            b - ((1.0 - u) * (b - a) * (b - c)).sqrt()
        }
    }
}

distribution_type!(
    /// Linearly decreasing density on `[a, b]`
    SawtoothLeft => DistributionInfo::continuous("sawtoothleft", "Left sawtooth distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for SawtoothLeft {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < a || x > b {
            return 0.0;
        }
        if a == b {
            return point_mass_pdf(x, a);
        }
        2.0 * (b - x) / (b - a).powi(2)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < a {
            return 0.0;
        }
        if x > b || a == b {
            return 1.0;
        }
        1.0 - (b - x).powi(2) / (b - a).powi(2)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        b - (b - a) * (1.0 - rng.uniform()).sqrt()
    }
}

distribution_type!(
    /// Linearly increasing density on `[a, b]`
    SawtoothRight => DistributionInfo::continuous("sawtoothright", "Right sawtooth distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for SawtoothRight {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < a || x > b {
            return 0.0;
        }
        if a == b {
            return point_mass_pdf(x, a);
        }
        2.0 * (x - a) / (b - a).powi(2)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if x < a {
            return 0.0;
        }
        if x > b || a == b {
            return 1.0;
        }
        (x - a).powi(2) / (b - a).powi(2)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        a + (b - a) * rng.uniform().sqrt()
    }
}

distribution_type!(
    /// U-quadratic distribution on `[a, b]`
    UQuadratic => DistributionInfo::continuous("uquadratic", "U-quadratic distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for UQuadratic {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < a || x > b {
            return 0.0;
        }
        let alpha = 12.0 / (b - a).powi(3);
        let center = (a + b) / 2.0;
        alpha * (x - center).powi(2)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        if x < a {
            return 0.0;
        }
        if x > b {
            return 1.0;
        }
        let alpha = 12.0 / (b - a).powi(3);
        let center = (a + b) / 2.0;
        alpha / 3.0 * ((x - center).powi(3) + (center - a).powi(3))
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return a;
        }
        let alpha = 12.0 / (b - a).powi(3);
        let center = (a + b) / 2.0;
        let v = 3.0 / alpha * rng.uniform() - (center - a).powi(3);
        center + v.cbrt()
    }
}

distribution_type!(
    /// Wigner semicircle distribution centered at `m` with radius `R`
    WignerSemicircle => DistributionInfo::continuous("wignersemicircle", "Wigner semicircle distribution")
        .with_parameter(ParameterDescriptor::continuous("m"))
        .with_parameter(ParameterDescriptor::continuous("R").greater_than(0.0))
);

impl Distribution for WignerSemicircle {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m, r] = params.array();
        let z = x - m;
        if z <= -r || z >= r {
            return 0.0;
        }
        2.0 / (PI * r * r) * (r * r - z * z).sqrt()
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [m, r] = params.array();
        let z = x - m;
        if z <= -r {
            return 0.0;
        }
        if z >= r {
            return 1.0;
        }
        0.5 + z * (r * r - z * z).sqrt() / (PI * r * r) + (z / r).asin() / PI
    }

    /// The semicircle law is a rescaled Beta(3/2, 3/2)
    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [m, r] = params.array();
        m + r * (2.0 * rng.beta(1.5, 1.5) - 1.0)
    }
}

distribution_type!(
    /// Power-function distribution on `[a, b]` with exponent `c`
    Power => DistributionInfo::continuous("power", "Power distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
        .with_parameter(ParameterDescriptor::continuous("c").greater_than(0.0))
);

impl Distribution for Power {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b, _] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c] = params.array();
        if x < a || x > b {
            return 0.0;
        }
        if a == b {
            return point_mass_pdf(x, a);
        }
        c * (x - a).powf(c - 1.0) / (b - a).powf(c)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, c] = params.array();
        if x < a {
            return 0.0;
        }
        if x > b || a == b {
            return 1.0;
        }
        ((x - a) / (b - a)).powf(c)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b, c] = params.array();
        a + (b - a) * rng.uniform().powf(1.0 / c)
    }
}

distribution_type!(
    /// Raised cosine distribution on `[a, b]`
    Cosine => DistributionInfo::continuous("cosine", "Cosine distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
);

impl Distribution for Cosine {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < a || x > b {
            return 0.0;
        }
        let width = b - a;
        (1.0 + (2.0 * PI * (x - a) / width - PI).cos()) / width
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        if x < a {
            return 0.0;
        }
        if x > b {
            return 1.0;
        }
        let width = b - a;
        let phase = 2.0 * PI * (x - a);
        (phase - width * (phase / width).sin()) / (2.0 * PI * width)
    }

    /// No closed-form inverse; bisection on the support
    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b] = params.array();
        if a == b {
            return a;
        }
        fallback::bisection_sample(|x| self.cdf(params, x), Some((a, b)), rng)
    }
}

distribution_type!(
    /// Continuous Bernoulli distribution rescaled to `[a, b]`
    ContinuousBernoulli => DistributionInfo::continuous("continuousbernoulli", "Continuous Bernoulli distribution")
        .with_parameter(ParameterDescriptor::continuous("a"))
        .with_parameter(ParameterDescriptor::continuous("b"))
        .with_parameter(ParameterDescriptor::continuous("lambda").greater_than(0.0).less_than(1.0))
);

impl Distribution for ContinuousBernoulli {
    fn info(&self) -> &DistributionInfo {
        &self.info
    }

    fn check_parameters(&self, params: &ParameterValues) -> Result<()> {
        let [a, b, _] = params.array();
        ensure_ordered("a", a, "b", b)
    }

    fn pdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, lambda] = params.array();
        if a == b {
            return point_mass_pdf(x, a);
        }
        if x < a || x > b {
            return 0.0;
        }
        let z = (x - a) / (b - a);
        let normalizer = if lambda == 0.5 {
            2.0
        } else {
            2.0 * (1.0 - 2.0 * lambda).atanh() / (1.0 - 2.0 * lambda)
        };
        normalizer * lambda.powf(z) * (1.0 - lambda).powf(1.0 - z) / (b - a)
    }

    fn cdf(&self, params: &ParameterValues, x: f64) -> f64 {
        let [a, b, lambda] = params.array();
        if a == b {
            return point_mass_cdf(x, a);
        }
        if x < a {
            return 0.0;
        }
        if x > b {
            return 1.0;
        }
        let z = (x - a) / (b - a);
        if lambda == 0.5 {
            return z;
        }
        (lambda.powf(z) * (1.0 - lambda).powf(1.0 - z) + lambda - 1.0) / (2.0 * lambda - 1.0)
    }

    fn sample(&self, params: &ParameterValues, rng: &mut RandomSource) -> f64 {
        let [a, b, lambda] = params.array();
        let u = rng.uniform();
        let z = if lambda == 0.5 {
            u
        } else {
            ((u * (2.0 * lambda - 1.0) + 1.0 - lambda) / (1.0 - lambda)).ln()
                / (lambda / (1.0 - lambda)).ln()
        };
        a + (b - a) * z
    }
}
