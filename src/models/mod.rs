// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, DirectionalScore, FieldName, Gender, HeightRange, MatchReport, ProfileRecord,
    ProfileStatus, RankedCandidate, RequirementBreakdown, RequirementSet,
};
pub use requests::{ComparePairRequest, FindMatchesRequest};
pub use responses::{
    ComparePairResponse, ErrorResponse, FindMatchesResponse, HealthResponse, MatchSummary,
    ProfileSnapshot,
};
