use crate::models::{Gender, ProfileRecord, ProfileStatus, RequirementSet};
use crate::services::store::StoreError;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use std::time::Duration;

const PROFILE_COLUMNS: &str = r#"
    id, name, gender, age, height, weight, "cast" AS cast_name, maslak,
    marital_status, mother_tongue, belongs, education, occupation,
    house_type, family_type, location, status, requirements
"#;

/// Row of the `profiles` table; the requirement set lives in a jsonb column
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: String,
    name: Option<String>,
    gender: Option<String>,
    age: i32,
    height: Option<String>,
    weight: Option<String>,
    cast_name: Option<String>,
    maslak: Option<String>,
    marital_status: Option<String>,
    mother_tongue: Option<String>,
    belongs: Option<String>,
    education: Option<String>,
    occupation: Option<String>,
    house_type: Option<String>,
    family_type: Option<String>,
    location: Option<String>,
    status: Option<String>,
    requirements: Option<Json<serde_json::Value>>,
}

impl TryFrom<ProfileRow> for ProfileRecord {
    type Error = StoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let age = u8::try_from(row.age).map_err(|_| StoreError::InvalidRecord {
            id: row.id.clone(),
            reason: format!("age {} out of range", row.age),
        })?;

        let requirements = match row.requirements {
            Some(Json(value)) if !value.is_null() => {
                serde_json::from_value::<RequirementSet>(value).map_err(|e| StoreError::InvalidRecord {
                    id: row.id.clone(),
                    reason: format!("requirements: {}", e),
                })?
            }
            _ => RequirementSet::default(),
        };

        Ok(ProfileRecord {
            gender: row.gender.as_deref().and_then(Gender::parse),
            status: row.status.as_deref().and_then(ProfileStatus::parse),
            id: row.id,
            name: row.name.unwrap_or_default(),
            age,
            height: row.height.unwrap_or_default(),
            weight: row.weight.unwrap_or_default(),
            cast: row.cast_name.unwrap_or_default(),
            maslak: row.maslak.unwrap_or_default(),
            marital_status: row.marital_status.unwrap_or_default(),
            mother_tongue: row.mother_tongue.unwrap_or_default(),
            belongs: row.belongs.unwrap_or_default(),
            education: row.education.unwrap_or_default(),
            occupation: row.occupation.unwrap_or_default(),
            house_type: row.house_type.unwrap_or_default(),
            family_type: row.family_type.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            requirements,
        })
    }
}

/// PostgreSQL-backed profile store
///
/// Read-only: the schema is owned by the data-entry application.
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Fetch one profile by id
    pub async fn get_profile(&self, id: &str) -> Result<ProfileRecord, StoreError> {
        let query = format!("SELECT {} FROM profiles WHERE id = $1", PROFILE_COLUMNS);

        let row: Option<ProfileRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let row = row.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        ProfileRecord::try_from(row)
    }

    /// Fetch the pool eligible for an anchor
    ///
    /// Rows that fail to convert are logged and left out rather than
    /// failing the whole scan.
    pub async fn scan_candidates(
        &self,
        anchor_id: &str,
        anchor_gender: Option<Gender>,
    ) -> Result<Vec<ProfileRecord>, StoreError> {
        let query = format!(
            r#"
            SELECT {}
            FROM profiles
            WHERE id <> $1
              AND (status IS NULL OR status = '' OR lower(status) = 'active')
              AND ($2::text IS NULL OR gender IS NULL OR lower(gender) <> lower($2))
            ORDER BY id
            "#,
            PROFILE_COLUMNS
        );

        let rows: Vec<ProfileRow> = sqlx::query_as(&query)
            .bind(anchor_id)
            .bind(anchor_gender.map(Gender::as_str))
            .fetch_all(&self.pool)
            .await?;

        let total = rows.len();
        let profiles: Vec<ProfileRecord> = rows
            .into_iter()
            .filter_map(|row| match ProfileRecord::try_from(row) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Skipping unreadable candidate row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Scanned {} candidates for {} ({} rows)", profiles.len(), anchor_id, total);

        Ok(profiles)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
