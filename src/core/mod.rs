// Core algorithm exports
pub mod constraint;
pub mod direct;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod requirements;

pub use constraint::{evaluate, evaluate_age_range, evaluate_height_range, Requirement};
pub use direct::{score_direct, DirectScore};
pub use error::EngineError;
pub use matcher::{Matcher, MatchResult, PARALLEL_POOL_THRESHOLD};
pub use normalize::{is_self_reference, is_wildcard, normalize_height, normalize_token};
pub use report::{compare, MATCH_THRESHOLD};
pub use requirements::{score_requirements, RequirementScore};
