use crate::core::{compare, EngineError, Matcher};
use crate::models::{ComparePairResponse, FindMatchesResponse, MatchSummary, ProfileSnapshot};
use crate::services::store::{ProfileStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the matching operations
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Profile store error: {0}")]
    Store(StoreError),

    #[error("Matching task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Engine(_) => 422,
            ServiceError::Store(_) | ServiceError::Task(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "Profile not found",
            ServiceError::Engine(_) => "Invalid profile data",
            ServiceError::Store(_) => "Profile store unavailable",
            ServiceError::Task(_) => "Matching failed",
        }
    }
}

/// Read-only matching operations over a profile store
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<ProfileStore>,
    matcher: Matcher,
}

impl MatchingService {
    pub fn new(store: Arc<ProfileStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Compare two profiles by id
    ///
    /// # Errors
    /// `NotFound` when either id does not resolve.
    pub async fn compare_pair(
        &self,
        profile_a_id: &str,
        profile_b_id: &str,
    ) -> Result<ComparePairResponse, ServiceError> {
        let profile_a = self.store.get_profile(profile_a_id).await?;
        let profile_b = self.store.get_profile(profile_b_id).await?;

        let report = compare(&profile_a, &profile_b);

        tracing::debug!(
            "Compared {} with {}: requirement {}%, direct {}%, match {}",
            profile_a_id,
            profile_b_id,
            report.requirement_match_percentage,
            report.direct_match_percentage,
            report.is_match
        );

        Ok(ComparePairResponse {
            report,
            profile_a: ProfileSnapshot::from(&profile_a),
            profile_b: ProfileSnapshot::from(&profile_b),
        })
    }

    /// Rank the eligible pool against one profile's preferences
    ///
    /// # Errors
    /// `NotFound` when the anchor does not resolve, `Engine` when the
    /// anchor has no gender.
    pub async fn find_matches_for(&self, profile_id: &str) -> Result<FindMatchesResponse, ServiceError> {
        let anchor = self.store.get_profile(profile_id).await?;
        let pool = self.store.scan_candidates(&anchor).await?;

        tracing::debug!("Found {} candidates for {}", pool.len(), profile_id);

        // Scoring is CPU-bound; keep it off the async workers
        let matcher = self.matcher.clone();
        let result = tokio::task::spawn_blocking(move || {
            matcher.find_matches(&anchor, pool).map(|result| (anchor.id, result))
        })
        .await??;
        let (profile_id, result) = result;

        let flagged_profile_ids = result
            .violations
            .iter()
            .map(|v| v.profile_id().to_string())
            .collect();

        let matches = result
            .matches
            .into_iter()
            .map(|m| MatchSummary {
                profile: ProfileSnapshot::from(&m.profile),
                score: m.score,
                matched_fields: m.matched_fields,
                age_difference: m.age_difference,
            })
            .collect();

        Ok(FindMatchesResponse {
            profile_id,
            matches,
            total_candidates: result.total_candidates,
            flagged_profile_ids,
        })
    }
}
