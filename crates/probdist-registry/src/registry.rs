//! The process-wide distribution catalogue
//!
//! The catalogue is built on first use and lives for the rest of the
//! process. All lookups hand out `'static` references into it.

use lazy_static::lazy_static;
use probdist_core::Distribution;
use std::cmp::Ordering;
use tracing::debug;

lazy_static! {
    static ref DISTRIBUTIONS: Vec<Box<dyn Distribution>> = {
        let all = probdist_catalog::all_distributions();
        debug!(count = all.len(), "built distribution catalogue");
        all
    };
}

/// Every registered distribution, discrete laws first
pub fn distributions() -> &'static [Box<dyn Distribution>] {
    &DISTRIBUTIONS
}

/// Which part of the catalogue to select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    All,
    Discrete,
    Continuous,
}

impl DistributionKind {
    pub fn matches(self, distribution: &dyn Distribution) -> bool {
        match self {
            Self::All => true,
            Self::Discrete => distribution.is_discrete(),
            Self::Continuous => !distribution.is_discrete(),
        }
    }
}

/// Look up a distribution by its function base name, e.g. `"normal"`
pub fn find(name: &str) -> Option<&'static dyn Distribution> {
    distributions()
        .iter()
        .find(|d| d.name() == name)
        .map(|d| d.as_ref())
}

/// Distributions of the given kind in catalogue order
pub fn filter(kind: DistributionKind) -> impl Iterator<Item = &'static dyn Distribution> {
    distributions()
        .iter()
        .map(|d| d.as_ref())
        .filter(move |d| kind.matches(*d))
}

/// Distributions of the given kind ordered by display name, ignoring case
pub fn sorted_by_display_name(kind: DistributionKind) -> Vec<&'static dyn Distribution> {
    let mut selected: Vec<_> = filter(kind).collect();
    selected.sort_by(|a, b| compare_display_names(a.display_name(), b.display_name()));
    selected
}

fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
