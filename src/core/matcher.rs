use crate::core::error::EngineError;
use crate::core::report::compare;
use crate::models::{ProfileRecord, RankedCandidate};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Eligible pool size from which candidate scoring fans out across threads
pub const PARALLEL_POOL_THRESHOLD: usize = 256;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
    /// Pool records skipped because their data breaks an engine invariant
    pub violations: Vec<EngineError>,
}

/// Candidate pool matcher
///
/// # Pipeline Stages
/// 1. Eligibility: active, opposite gender, not the anchor itself
/// 2. Pairwise report per survivor, scored from the anchor's preferences
/// 3. Keep reported matches
/// 4. Deterministic ranking
#[derive(Debug, Clone)]
pub struct Matcher {
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold: parallel_threshold.max(1),
        }
    }

    /// Find the profiles in `pool` that match `anchor`
    ///
    /// The score of each candidate is the anchor-as-requirer percentage.
    /// Results are ordered by score (descending), age difference
    /// (ascending), name (case-insensitive) and finally id. Nothing is
    /// returned before the whole pool has been scored.
    ///
    /// An anchor that is not active gets no matches.
    ///
    /// # Errors
    /// Fails only when the anchor itself has no gender. Pool records without
    /// a gender are skipped and reported in [`MatchResult::violations`].
    pub fn find_matches(
        &self,
        anchor: &ProfileRecord,
        pool: Vec<ProfileRecord>,
    ) -> Result<MatchResult, EngineError> {
        let anchor_gender = anchor
            .gender
            .ok_or_else(|| EngineError::missing_gender(&anchor.id))?;
        let total_candidates = pool.len();
        let mut violations = Vec::new();

        if !anchor.is_active() {
            tracing::debug!("Anchor {} is not active, skipping search", anchor.id);
            return Ok(MatchResult {
                matches: Vec::new(),
                total_candidates,
                violations,
            });
        }

        // Stage 1: eligibility
        let eligible: Vec<ProfileRecord> = pool
            .into_iter()
            .filter(|candidate| candidate.id != anchor.id && candidate.is_active())
            .filter(|candidate| match candidate.gender {
                Some(gender) => gender != anchor_gender,
                None => {
                    let violation = EngineError::missing_gender(&candidate.id);
                    tracing::warn!("Skipping candidate: {}", violation);
                    violations.push(violation);
                    false
                }
            })
            .collect();

        tracing::debug!(
            "Scoring {} eligible of {} candidates for {}",
            eligible.len(),
            total_candidates,
            anchor.id
        );

        // Stages 2 & 3: report and keep matches
        let score = |candidate: ProfileRecord| -> Option<RankedCandidate> {
            let report = compare(anchor, &candidate);
            if !report.is_match {
                return None;
            }
            let anchor_view = report.requirement_breakdown.a_requires_b;
            Some(RankedCandidate {
                score: anchor_view.percentage,
                matched_fields: anchor_view.satisfied_fields,
                age_difference: report.age_difference,
                profile: candidate,
            })
        };

        let mut matches: Vec<RankedCandidate> = if eligible.len() >= self.parallel_threshold {
            eligible.into_par_iter().filter_map(score).collect()
        } else {
            eligible.into_iter().filter_map(score).collect()
        };

        // Stage 4: ranking
        matches.sort_by_cached_key(|m| {
            (
                Reverse(m.score),
                m.age_difference,
                m.profile.name.to_lowercase(),
                m.profile.id.clone(),
            )
        });

        Ok(MatchResult {
            matches,
            total_candidates,
            violations,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(PARALLEL_POOL_THRESHOLD)
    }
}
