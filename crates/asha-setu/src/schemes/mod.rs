//! Scheme catalog, eligibility matching, and the intake boundary in front of it.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod intake;
pub mod matching;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError, CatalogLoader};
pub use criteria::{
    AttributeValue, Categorical, Criterion, EligibilityRuleSet, LocationCriterion,
    RangeCriterion, PAN_INDIA,
};
pub use domain::{CriterionKind, Profile, ProfileAttribute, Program, RankedResult};
pub use intake::{IntakeError, NumericInput, ProfileGuard, ProfileSubmission, JURISDICTIONS};
pub use matching::{
    match_profile, normalize, rank_programs, score_program, value_matches, MatchingEngine,
    ProgramScore,
};
pub use router::scheme_router;
pub use service::{MatchReport, SchemeMatchingService, SchemeServiceError};
