use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::Catalog;
use super::domain::{Profile, RankedResult};
use super::intake::{IntakeError, ProfileGuard, ProfileSubmission};
use super::matching::MatchingEngine;

/// Response body for a match request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub count: usize,
    pub schemes: Vec<RankedResult>,
}

impl From<Vec<RankedResult>> for MatchReport {
    fn from(schemes: Vec<RankedResult>) -> Self {
        Self {
            count: schemes.len(),
            schemes,
        }
    }
}

/// Service composing the intake guard and the matching engine.
pub struct SchemeMatchingService {
    guard: ProfileGuard,
    engine: MatchingEngine,
}

impl SchemeMatchingService {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_guard(ProfileGuard::default(), catalog)
    }

    pub fn with_guard(guard: ProfileGuard, catalog: Catalog) -> Self {
        Self {
            guard,
            engine: MatchingEngine::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    /// Validate raw answers and rank the catalog for them.
    pub fn match_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<MatchReport, SchemeServiceError> {
        let profile = match self.guard.profile_from_submission(submission) {
            Ok(profile) => profile,
            Err(error) => {
                warn!(%error, "rejected profile submission");
                return Err(error.into());
            }
        };

        Ok(self.match_profile(&profile))
    }

    pub fn match_profile(&self, profile: &Profile) -> MatchReport {
        let report = MatchReport::from(self.engine.rank(profile));
        info!(
            state = %profile.state,
            sector = %profile.sector,
            matched = report.count,
            "matched profile against scheme catalog"
        );
        report
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum SchemeServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
