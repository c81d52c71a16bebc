//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use probdist::prelude::*;

pub const SEED: u64 = 0x5eed;

/// Function map with a fixed seed
pub fn seeded_functions() -> FunctionMap {
    build_function_map(&RegistryConfig::default().with_seed(SEED))
}

/// Midpoint-rule integral of `f` over `[lo, hi]`
pub fn integrate(f: impl Fn(f64) -> f64, lo: f64, hi: f64, steps: usize) -> f64 {
    let h = (hi - lo) / steps as f64;
    (0..steps).map(|i| f(lo + (i as f64 + 0.5) * h)).sum::<f64>() * h
}

/// Sample mean and unbiased variance
pub fn moments(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

/// Draw `n` values by calling `name_random(args)`
pub fn draw(functions: &FunctionMap, name: &str, args: &[f64], n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| functions.call(&format!("{name}_random"), args).unwrap())
        .collect()
}

/// One valid parameter set per distribution, with a window holding
/// (almost) all of its probability mass
pub fn reference_cases() -> Vec<(&'static str, Vec<f64>, (f64, f64))> {
    vec![
        ("discreteuniform", vec![-3.0, 4.0], (-10.0, 10.0)),
        ("hypergeom", vec![20.0, 7.0, 5.0], (0.0, 5.0)),
        ("binomial", vec![10.0, 0.3], (0.0, 10.0)),
        ("poisson", vec![5.0], (0.0, 60.0)),
        ("geometric", vec![0.4], (0.0, 80.0)),
        ("negativehypergeom", vec![20.0, 10.0, 3.0], (0.0, 30.0)),
        ("negativebinomial", vec![3.0, 0.6], (0.0, 100.0)),
        ("rademacher", vec![], (-1.0, 1.0)),
        ("bernoulli", vec![0.3], (0.0, 1.0)),
        ("borel", vec![0.3], (1.0, 60.0)),
        ("logarithmic", vec![0.5], (1.0, 60.0)),
        ("planck", vec![1.0], (0.0, 60.0)),
        ("boltzmann", vec![0.5, 10.0], (0.0, 9.0)),
        ("uniform", vec![-1.0, 3.0], (-1.0, 3.0)),
        ("exp", vec![2.0], (0.0, 30.0)),
        ("normal", vec![1.0, 2.0], (-30.0, 30.0)),
        ("lognormal", vec![2.0, 1.0], (0.0, 60.0)),
        ("beta", vec![2.0, 3.0, 0.0, 1.0], (0.0, 1.0)),
        ("chi", vec![3.0], (0.0, 20.0)),
        ("chisquared", vec![4.0], (0.0, 100.0)),
        ("erlang", vec![3.0, 2.0], (0.0, 100.0)),
        ("gamma", vec![2.5, 1.5], (0.0, 100.0)),
        ("gumbel", vec![0.0, 1.0], (-20.0, 30.0)),
        ("laplace", vec![0.0, 1.0], (-40.0, 40.0)),
        ("logistic", vec![0.0, 1.0], (-50.0, 50.0)),
        ("maxwellboltzmann", vec![1.0], (0.0, 20.0)),
        ("pert", vec![0.0, 2.0, 10.0], (0.0, 10.0)),
        ("triangular", vec![0.0, 2.0, 5.0], (0.0, 5.0)),
        ("trapezoid", vec![0.0, 1.0, 3.0, 4.0], (0.0, 4.0)),
        ("rayleigh", vec![1.0], (0.0, 20.0)),
        ("weibull", vec![2.0, 0.5], (0.0, 40.0)),
        ("wignersemicircle", vec![0.0, 2.0], (-2.0, 2.0)),
    ]
}
