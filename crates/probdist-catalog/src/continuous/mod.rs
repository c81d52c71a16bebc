//! Continuous distributions
//!
//! Split by support: [`bounded`] laws live on `[a, b]`, [`location_scale`]
//! laws on the real line and [`lifetime`] laws on a half-line.

pub mod bounded;
pub mod lifetime;
pub mod location_scale;

pub use bounded::*;
pub use lifetime::*;
pub use location_scale::*;

use probdist_core::{Distribution, Error, Result};

/// Density of a point mass at `at`
pub(crate) fn point_mass_pdf(x: f64, at: f64) -> f64 {
    if x == at {
        f64::INFINITY
    } else {
        0.0
    }
}

/// CDF of a point mass at `at`
pub(crate) fn point_mass_cdf(x: f64, at: f64) -> f64 {
    if x < at {
        0.0
    } else {
        1.0
    }
}

/// `upper_id has to be >=lower_id` unless `lower <= upper`
pub(crate) fn ensure_ordered(lower_id: &str, lower: f64, upper_id: &str, upper: f64) -> Result<()> {
    if lower > upper {
        return Err(Error::relation(upper_id, ">=", lower_id));
    }
    Ok(())
}

/// All continuous distributions in canonical order
pub fn distributions() -> Vec<Box<dyn Distribution>> {
    vec![
        Box::new(Uniform::new()),
        Box::new(Exponential::new()),
        Box::new(Normal::new()),
        Box::new(LogNormal::new()),
        Box::new(Arcsine::new()),
        Box::new(Beta::new()),
        Box::new(Cauchy::new()),
        Box::new(Chi::new()),
        Box::new(ChiSquared::new()),
        Box::new(Erlang::new()),
        Box::new(FisherF::new()),
        Box::new(Gamma::new()),
        Box::new(Gumbel::new()),
        Box::new(HalfNormal::new()),
        Box::new(HyperbolicSecant::new()),
        Box::new(InverseGaussian::new()),
        Box::new(IrwinHall::new()),
        Box::new(JohnsonSU::new()),
        Box::new(Kumaraswamy::new()),
        Box::new(Laplace::new()),
        Box::new(Levy::new()),
        Box::new(Logistic::new()),
        Box::new(LogLogistic::new()),
        Box::new(MaxwellBoltzmann::new()),
        Box::new(Pareto::new()),
        Box::new(Pert::new()),
        Box::new(Reciprocal::new()),
        Box::new(Sine::new()),
        Box::new(StudentT::new()),
        Box::new(Trapezoid::new()),
        Box::new(Triangular::new()),
        Box::new(SawtoothLeft::new()),
        Box::new(SawtoothRight::new()),
        Box::new(UQuadratic::new()),
        Box::new(Weibull::new()),
        Box::new(WignerSemicircle::new()),
        Box::new(FatigueLife::new()),
        Box::new(Frechet::new()),
        Box::new(LogCauchy::new()),
        Box::new(Power::new()),
        Box::new(Rayleigh::new()),
        Box::new(Cosine::new()),
        Box::new(LogGamma::new()),
        Box::new(InverseGamma::new()),
        Box::new(ContinuousBernoulli::new()),
        Box::new(HalfCauchy::new()),
        Box::new(LogLaplace::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_mass() {
        assert_eq!(point_mass_pdf(2.0, 2.0), f64::INFINITY);
        assert_eq!(point_mass_pdf(2.1, 2.0), 0.0);
        assert_eq!(point_mass_cdf(1.9, 2.0), 0.0);
        assert_eq!(point_mass_cdf(2.0, 2.0), 1.0);
    }

    #[test]
    fn test_ensure_ordered_message() {
        assert!(ensure_ordered("a", 1.0, "b", 1.0).is_ok());
        let err = ensure_ordered("a", 2.0, "b", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "b has to be >=a");
    }

    #[test]
    fn test_all_continuous() {
        let all = distributions();
        assert_eq!(all.len(), 47);
        assert!(all.iter().all(|d| !d.is_discrete()));
    }
}
