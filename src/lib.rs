//! Rishta Engine - compatibility matching for a matrimonial profile directory
//!
//! The library turns two profile records into a compatibility verdict with
//! a field-level explanation, and ranks a candidate pool against one
//! profile's stated preferences. The engine in [`core`] is pure; [`services`]
//! resolves profiles and [`routes`] exposes the operations over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compare, EngineError, Matcher, MatchResult};
pub use models::{FieldName, MatchReport, ProfileRecord, RankedCandidate, RequirementSet};
pub use services::{InMemoryProfileStore, MatchingService, ProfileStore};
