use thiserror::Error;

/// Signals bad upstream data the engine cannot score meaningfully
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invariant violation on profile {profile_id}: {reason}")]
    InvariantViolation { profile_id: String, reason: String },
}

impl EngineError {
    pub fn missing_gender(profile_id: &str) -> Self {
        EngineError::InvariantViolation {
            profile_id: profile_id.to_string(),
            reason: "gender is not set".to_string(),
        }
    }

    pub fn profile_id(&self) -> &str {
        match self {
            EngineError::InvariantViolation { profile_id, .. } => profile_id,
        }
    }
}
