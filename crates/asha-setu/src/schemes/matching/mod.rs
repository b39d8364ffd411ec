mod rules;
mod scoring;

pub use rules::{normalize, value_matches};
pub use scoring::{score_program, ProgramScore};

pub(crate) use rules::normalize_text;

use super::catalog::Catalog;
use super::domain::{Profile, Program, RankedResult};
use tracing::debug;

/// Score every program, drop those at zero, and order the rest by percentage.
///
/// The sort is stable: equal percentages keep the order the programs were
/// supplied in.
pub fn rank_programs<'a, I>(programs: I, profile: &Profile) -> Vec<RankedResult>
where
    I: IntoIterator<Item = &'a Program>,
{
    let mut results: Vec<RankedResult> = programs
        .into_iter()
        .map(|program| score_program(program, profile).into_result(program))
        .filter(|result| result.eligibility_percentage > 0)
        .collect();

    results.sort_by(|a, b| b.eligibility_percentage.cmp(&a.eligibility_percentage));
    results
}

/// Rank the whole catalog for one profile.
pub fn match_profile(profile: &Profile, catalog: &Catalog) -> Vec<RankedResult> {
    let results = rank_programs(catalog.programs(), profile);
    debug!(
        candidates = catalog.len(),
        matched = results.len(),
        "ranked catalog for profile"
    );
    results
}

/// Stateless matcher bound to an immutable catalog handle.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Catalog,
}

impl MatchingEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rank(&self, profile: &Profile) -> Vec<RankedResult> {
        match_profile(profile, &self.catalog)
    }
}
