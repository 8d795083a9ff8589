use serde::{Deserialize, Serialize};
use crate::models::domain::{FieldName, Gender, MatchReport, ProfileRecord};

/// Compared attributes of one profile, echoed back for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub id: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub age: u8,
    pub height: String,
    pub weight: String,
    pub cast: String,
    pub maslak: String,
    pub marital_status: String,
    pub mother_tongue: String,
    pub belongs: String,
    pub education: String,
    pub occupation: String,
    pub house_type: String,
    pub family_type: String,
    pub location: String,
}

impl From<&ProfileRecord> for ProfileSnapshot {
    fn from(profile: &ProfileRecord) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            gender: profile.gender,
            age: profile.age,
            height: profile.height.clone(),
            weight: profile.weight.clone(),
            cast: profile.cast.clone(),
            maslak: profile.maslak.clone(),
            marital_status: profile.marital_status.clone(),
            mother_tongue: profile.mother_tongue.clone(),
            belongs: profile.belongs.clone(),
            education: profile.education.clone(),
            occupation: profile.occupation.clone(),
            house_type: profile.house_type.clone(),
            family_type: profile.family_type.clone(),
            location: profile.location.clone(),
        }
    }
}

/// Response for the compare endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparePairResponse {
    #[serde(flatten)]
    pub report: MatchReport,
    #[serde(rename = "profileA")]
    pub profile_a: ProfileSnapshot,
    #[serde(rename = "profileB")]
    pub profile_b: ProfileSnapshot,
}

/// One entry of a ranked match list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub profile: ProfileSnapshot,
    pub score: u8,
    #[serde(rename = "matchedFields")]
    pub matched_fields: Vec<FieldName>,
    #[serde(rename = "ageDifference")]
    pub age_difference: u8,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub matches: Vec<MatchSummary>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Pool records skipped because their data breaks an engine invariant
    #[serde(rename = "flaggedProfileIds")]
    pub flagged_profile_ids: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
