use crate::models::{Gender, ProfileRecord};
use crate::services::postgres::PostgresProfileStore;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when resolving profiles
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("SQLx error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid profile record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Failed to read seed file: {0}")]
    Seed(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

/// Source of profile records for the matching service
///
/// Both backends expose the same lookups: a single profile by id, and a
/// scan of the pool eligible for an anchor (active, not the anchor, not of
/// the anchor's gender). Records without a gender stay in the scan so the
/// engine can flag them.
pub enum ProfileStore {
    Postgres(PostgresProfileStore),
    InMemory(InMemoryProfileStore),
}

impl ProfileStore {
    pub async fn get_profile(&self, id: &str) -> Result<ProfileRecord, StoreError> {
        match self {
            ProfileStore::Postgres(store) => store.get_profile(id).await,
            ProfileStore::InMemory(store) => store.get_profile(id),
        }
    }

    pub async fn scan_candidates(&self, anchor: &ProfileRecord) -> Result<Vec<ProfileRecord>, StoreError> {
        match self {
            ProfileStore::Postgres(store) => store.scan_candidates(&anchor.id, anchor.gender).await,
            ProfileStore::InMemory(store) => Ok(store.scan_candidates(&anchor.id, anchor.gender)),
        }
    }

    pub async fn health_check(&self) -> bool {
        match self {
            ProfileStore::Postgres(store) => store.health_check().await.unwrap_or(false),
            ProfileStore::InMemory(_) => true,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            ProfileStore::Postgres(_) => "postgres",
            ProfileStore::InMemory(_) => "memory",
        }
    }
}

/// Profile store held entirely in memory, seeded from a list or a JSON file
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Vec<ProfileRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryProfileStore {
    /// Later records with a duplicate id replace earlier ones
    pub fn new(profiles: Vec<ProfileRecord>) -> Self {
        let mut store = Self::default();
        for profile in profiles {
            store.insert(profile);
        }
        store
    }

    /// Load a JSON array of profile records
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let profiles: Vec<ProfileRecord> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} profiles from {}",
            profiles.len(),
            path.as_ref().display()
        );
        Ok(Self::new(profiles))
    }

    pub fn insert(&mut self, profile: ProfileRecord) {
        match self.index.get(&profile.id) {
            Some(&pos) => self.profiles[pos] = profile,
            None => {
                self.index.insert(profile.id.clone(), self.profiles.len());
                self.profiles.push(profile);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get_profile(&self, id: &str) -> Result<ProfileRecord, StoreError> {
        self.index
            .get(id)
            .map(|&pos| self.profiles[pos].clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn scan_candidates(&self, anchor_id: &str, anchor_gender: Option<Gender>) -> Vec<ProfileRecord> {
        self.profiles
            .iter()
            .filter(|p| p.id != anchor_id && p.is_active())
            .filter(|p| match (p.gender, anchor_gender) {
                (Some(gender), Some(anchor)) => gender != anchor,
                _ => true,
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileStatus, RequirementSet};
    use std::io::Write;

    fn profile(id: &str, gender: Option<Gender>, status: Option<ProfileStatus>) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            name: id.to_string(),
            gender,
            age: 28,
            height: String::new(),
            weight: String::new(),
            cast: String::new(),
            maslak: String::new(),
            marital_status: String::new(),
            mother_tongue: String::new(),
            belongs: String::new(),
            education: String::new(),
            occupation: String::new(),
            house_type: String::new(),
            family_type: String::new(),
            location: String::new(),
            status,
            requirements: RequirementSet::default(),
        }
    }

    #[test]
    fn test_get_profile_not_found() {
        let store = InMemoryProfileStore::new(vec![profile("a", Some(Gender::Male), None)]);

        assert!(store.get_profile("a").is_ok());
        assert!(matches!(store.get_profile("zz"), Err(StoreError::NotFound(id)) if id == "zz"));
    }

    #[test]
    fn test_scan_filters_gender_status_and_self() {
        let store = InMemoryProfileStore::new(vec![
            profile("anchor", Some(Gender::Male), None),
            profile("f1", Some(Gender::Female), Some(ProfileStatus::Active)),
            profile("f2", Some(Gender::Female), Some(ProfileStatus::Inactive)),
            profile("m1", Some(Gender::Male), None),
            profile("unknown", None, None),
        ]);

        let ids: Vec<String> = store
            .scan_candidates("anchor", Some(Gender::Male))
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec!["f1", "unknown"]);
    }

    #[test]
    fn test_duplicate_ids_replace() {
        let mut store = InMemoryProfileStore::new(vec![profile("a", Some(Gender::Male), None)]);
        store.insert(profile("a", Some(Gender::Female), None));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_profile("a").unwrap().gender, Some(Gender::Female));
    }

    #[test]
    fn test_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "p1", "age": 27, "gender": "Female", "requirements": {{"cast": "Syed"}}}}]"#
        )
        .unwrap();

        let store = InMemoryProfileStore::from_seed_file(file.path()).unwrap();
        let profile = store.get_profile("p1").unwrap();

        assert_eq!(profile.requirements.cast, vec!["Syed"]);
    }

    #[test]
    fn test_malformed_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            InMemoryProfileStore::from_seed_file(file.path()),
            Err(StoreError::SeedFormat(_))
        ));
    }

    #[test]
    fn test_scan_excludes_unrecognized_status() {
        let json = r#"[
            {"id": "anchor", "age": 30, "gender": "Male"},
            {"id": "f1", "age": 27, "gender": "Female", "status": "Active"},
            {"id": "f2", "age": 27, "gender": "Female", "status": "Pending"},
            {"id": "f3", "age": 27, "gender": "Female", "status": "Suspended"}
        ]"#;
        let profiles: Vec<ProfileRecord> = serde_json::from_str(json).unwrap();
        let store = InMemoryProfileStore::new(profiles);

        let ids: Vec<String> = store
            .scan_candidates("anchor", Some(Gender::Male))
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec!["f1"]);
    }

    #[tokio::test]
    async fn test_store_dispatch() {
        let store = ProfileStore::InMemory(InMemoryProfileStore::new(vec![
            profile("a", Some(Gender::Male), None),
            profile("b", Some(Gender::Female), None),
        ]));

        let anchor = store.get_profile("a").await.unwrap();
        let pool = store.scan_candidates(&anchor).await.unwrap();

        assert_eq!(pool.len(), 1);
        assert!(store.health_check().await);
        assert_eq!(store.backend_name(), "memory");
    }
}
