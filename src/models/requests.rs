use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compare two named profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComparePairRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_a_id", rename = "profileAId")]
    pub profile_a_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "profile_b_id", rename = "profileBId")]
    pub profile_b_id: String,
}

/// Request to find matches for one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
}
