//! Generic numerical fallbacks for distributions without closed forms
//!
//! These are free functions so a distribution can opt into any of them
//! from its own `cdf`/`sample` implementation:
//!
//! - [`discrete_cdf`]: sum the mass function from a lower bound up to `x`
//! - [`discrete_sample`]: accumulate mass until it exceeds a uniform draw
//! - [`bisection_sample`]: invert a continuous CDF by bisection
//!
//! The discrete fallbacks are exact only if the mass below `lower` is zero
//! (or negligible). Distributions pass their support minimum; the historical
//! fixed sentinel [`DEFAULT_LOWER_SENTINEL`] is for laws without one.

use crate::RandomSource;
use tracing::warn;

/// Lower summation bound for discrete laws that declare no support minimum
pub const DEFAULT_LOWER_SENTINEL: f64 = -10.0;

/// Maximum number of mass terms summed by [`discrete_cdf`]
pub const CDF_TERM_LIMIT: u64 = 10_000_000;

const MAX_BISECTION_STEPS: usize = 200;

/// CDF of a discrete law as a partial sum of its mass function
///
/// Sums `pdf(k)` for `k = lower, lower + 1, ..., floor(x)`. The sum stops
/// early once it reaches `1` or after [`CDF_TERM_LIMIT`] terms.
pub fn discrete_cdf(pdf: impl Fn(f64) -> f64, lower: f64, x: f64) -> f64 {
    let upper = x.floor();
    let mut sum = 0.0;
    let mut k = lower;
    let mut terms = 0u64;
    while k <= upper && terms < CDF_TERM_LIMIT {
        sum += pdf(k);
        if sum >= 1.0 {
            return 1.0;
        }
        k += 1.0;
        terms += 1;
    }
    sum
}

/// Inverse-CDF draw from a discrete law by sequential search
///
/// Draws one uniform `u` and returns the smallest `k >= lower` whose
/// cumulative mass reaches `u`. The search gives up after the configured
/// term limit and returns the last visited value.
pub fn discrete_sample(pdf: impl Fn(f64) -> f64, lower: f64, rng: &mut RandomSource) -> f64 {
    let limit = rng.config().discrete_term_limit;
    let u = rng.uniform();

    let mut k = lower;
    let mut cumulative = pdf(k);
    let mut terms = 1u64;
    while cumulative < u {
        if terms >= limit {
            warn!("Discrete search stopped after {limit} terms at k={k}");
            break;
        }
        k += 1.0;
        cumulative += pdf(k);
        terms += 1;
    }
    k
}

/// Inverse-CDF draw from a continuous law by bisection
///
/// Searches `bracket`, or `[-bound, bound]` from the source's configuration,
/// for the point where `cdf` crosses a fresh uniform draw. Stops when the
/// bracket is narrower than the configured tolerance. If the CDF already
/// exceeds the draw at the left end (or stays below it at the right end),
/// that end is returned.
pub fn bisection_sample(
    cdf: impl Fn(f64) -> f64,
    bracket: Option<(f64, f64)>,
    rng: &mut RandomSource,
) -> f64 {
    let config = *rng.config();
    let (mut a, mut b) =
        bracket.unwrap_or((-config.bisection_bound, config.bisection_bound));
    let u = rng.uniform();

    if cdf(a) > u {
        return a;
    }
    if cdf(b) < u {
        return b;
    }

    let mut steps = 0;
    while b - a > config.bisection_tolerance && steps < MAX_BISECTION_STEPS {
        let m = (a + b) / 2.0;
        if cdf(m) > u {
            b = m;
        } else {
            a = m;
        }
        steps += 1;
    }
    (a + b) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplingConfig;
    use approx::assert_abs_diff_eq;

    fn geometric_pmf(p: f64) -> impl Fn(f64) -> f64 {
        move |k| if k < 0.0 { 0.0 } else { p * (1.0 - p).powf(k) }
    }

    #[test]
    fn test_discrete_cdf_partial_sums() {
        let pmf = geometric_pmf(0.5);
        assert_abs_diff_eq!(discrete_cdf(&pmf, 0.0, 0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(discrete_cdf(&pmf, 0.0, 2.0), 0.875, epsilon = 1e-15);
        assert_abs_diff_eq!(discrete_cdf(&pmf, 0.0, 2.7), 0.875, epsilon = 1e-15);
        assert_eq!(discrete_cdf(&pmf, 0.0, -1.0), 0.0);
    }

    #[test]
    fn test_discrete_cdf_with_sentinel_matches_exact_lower_bound() {
        let pmf = geometric_pmf(0.3);
        let exact = discrete_cdf(&pmf, 0.0, 5.0);
        let sentinel = discrete_cdf(&pmf, DEFAULT_LOWER_SENTINEL, 5.0);
        assert_abs_diff_eq!(exact, sentinel, epsilon = 1e-15);
    }

    #[test]
    fn test_discrete_cdf_saturates() {
        let pmf = |k: f64| if k == 0.0 { 1.0 } else { 0.0 };
        assert_eq!(discrete_cdf(pmf, 0.0, f64::INFINITY), 1.0);
    }

    #[test]
    fn test_discrete_sample_frequencies() {
        let pmf = geometric_pmf(0.5);
        let mut rng = RandomSource::seeded(17);
        let n = 20_000;
        let zeros = (0..n)
            .filter(|_| discrete_sample(&pmf, 0.0, &mut rng) == 0.0)
            .count();
        assert_abs_diff_eq!(zeros as f64 / n as f64, 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_discrete_sample_respects_term_limit() {
        let mut rng = RandomSource::seeded(1)
            .with_config(SamplingConfig::default().with_discrete_term_limit(5));
        // no mass anywhere: the search must still terminate
        let k = discrete_sample(|_| 0.0, 0.0, &mut rng);
        assert_eq!(k, 4.0);
    }

    #[test]
    fn test_bisection_sample_inverts_cdf() {
        let cdf = |x: f64| x.clamp(0.0, 1.0);
        let mut rng = RandomSource::seeded(23)
            .with_config(SamplingConfig::default().with_bisection_tolerance(1e-9));
        let samples: Vec<f64> = (0..10_000)
            .map(|_| bisection_sample(cdf, None, &mut rng))
            .collect();
        assert!(samples.iter().all(|x| (0.0..=1.0).contains(x)));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
    }

    #[test]
    fn test_bisection_sample_uses_bracket() {
        let mut rng = RandomSource::seeded(29);
        // CDF is 1 everywhere in the bracket: the left end is returned
        assert_eq!(bisection_sample(|_| 1.0, Some((3.0, 4.0)), &mut rng), 3.0);
        // CDF never reaches the draw: the right end is returned
        assert_eq!(bisection_sample(|_| -1.0, Some((3.0, 4.0)), &mut rng), 4.0);
    }
}
