//! Human-readable descriptions for the calculator's expression builder

use crate::functions::{CDF_SUFFIX, PDF_SUFFIX, RANDOM_SUFFIX};
use crate::registry::{sorted_by_display_name, DistributionKind};
use probdist_core::{Distribution, ParameterDescriptor, Result};
use serde::Serialize;

/// Plain-text domain of one parameter
///
/// Bounded parameters render as inequalities (`0<=sigma`, `0<p<1`,
/// `n>=1` for integers), unbounded ones as set membership
/// (`mu ∈ R`, `a ∈ Z`).
pub fn domain_text(parameter: &ParameterDescriptor) -> String {
    let id = parameter.id();
    let (min, max) = (parameter.min_value(), parameter.max_value());

    if parameter.is_discrete() {
        return match (min, max) {
            (None, None) => format!("{id} ∈ Z"),
            (Some(min), None) => format!("{id}>={min}"),
            (None, Some(max)) => format!("{id}<={max}"),
            (Some(min), Some(max)) => format!("{min}<={id}<={max}"),
        };
    }

    if min.is_none() && max.is_none() {
        return format!("{id} ∈ R");
    }
    let mut text = String::new();
    if let Some(min) = min {
        let op = if parameter.min_inclusive() { "<=" } else { "<" };
        text.push_str(&format!("{min}{op}"));
    }
    text.push_str(id);
    if let Some(max) = max {
        let op = if parameter.max_inclusive() { "<=" } else { "<" };
        text.push_str(&format!("{op}{max}"));
    }
    text
}

fn parameter_list(distribution: &dyn Distribution) -> Vec<&'static str> {
    distribution.parameters().iter().map(|p| p.id()).collect()
}

/// `name_pdf(x;p1;...;pn)`
pub fn pdf_signature(distribution: &dyn Distribution) -> String {
    point_signature(distribution, PDF_SUFFIX)
}

/// `name_cdf(x;p1;...;pn)`
pub fn cdf_signature(distribution: &dyn Distribution) -> String {
    point_signature(distribution, CDF_SUFFIX)
}

/// `name_random(p1;...;pn)`
pub fn random_signature(distribution: &dyn Distribution) -> String {
    format!(
        "{}{RANDOM_SUFFIX}({})",
        distribution.name(),
        parameter_list(distribution).join(";")
    )
}

fn point_signature(distribution: &dyn Distribution, suffix: &str) -> String {
    let mut args = vec!["x"];
    args.extend(parameter_list(distribution));
    format!("{}{suffix}({})", distribution.name(), args.join(";"))
}

/// One parameter line of a description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSummary {
    pub id: &'static str,
    pub domain: String,
}

/// Everything the expression builder shows for one distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub name: &'static str,
    pub display_name: &'static str,
    pub discrete: bool,
    pub pdf: String,
    pub cdf: String,
    pub random: String,
    pub parameters: Vec<ParameterSummary>,
}

impl DistributionSummary {
    pub fn of(distribution: &dyn Distribution) -> Self {
        Self {
            name: distribution.name(),
            display_name: distribution.display_name(),
            discrete: distribution.is_discrete(),
            pdf: pdf_signature(distribution),
            cdf: cdf_signature(distribution),
            random: random_signature(distribution),
            parameters: distribution
                .parameters()
                .iter()
                .map(|p| ParameterSummary {
                    id: p.id(),
                    domain: domain_text(p),
                })
                .collect(),
        }
    }
}

/// Summaries of one catalogue group, ordered by display name
pub fn summaries(kind: DistributionKind) -> Vec<DistributionSummary> {
    sorted_by_display_name(kind)
        .into_iter()
        .map(DistributionSummary::of)
        .collect()
}

/// The discrete group followed by the continuous group, as pretty JSON
pub fn catalogue_json() -> Result<String> {
    let mut all = summaries(DistributionKind::Discrete);
    all.extend(summaries(DistributionKind::Continuous));
    Ok(serde_json::to_string_pretty(&all)?)
}
