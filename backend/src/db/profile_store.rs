use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::StudentProfile;

/// Key the onboarding page writes and the search page reads.
pub const PROFILE_KEY: &str = "peterProfile";

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` for "no profile", including a stored value that no longer
    /// parses.
    async fn load(&self) -> Result<Option<StudentProfile>, AppError>;

    /// Overwrites whatever was stored before.
    async fn save(&self, profile: &StudentProfile) -> Result<(), AppError>;
}

pub async fn get_item(db: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = ?")
        .bind(key)
        .fetch_optional(db)
        .await
}

pub async fn set_item(db: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO local_storage (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(db)
    .await?;

    Ok(())
}

fn decode(raw: Option<String>) -> Option<StudentProfile> {
    let raw = raw?;
    match serde_json::from_str::<StudentProfile>(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            let err = AppError::PersistedStateCorrupt(e);
            warn!("{}; treating as no profile", err);
            None
        }
    }
}

pub struct SqliteProfileStore {
    db: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn load(&self) -> Result<Option<StudentProfile>, AppError> {
        let raw = get_item(&self.db, PROFILE_KEY).await?;
        Ok(decode(raw))
    }

    async fn save(&self, profile: &StudentProfile) -> Result<(), AppError> {
        let value = serde_json::to_string(profile)?;
        set_item(&self.db, PROFILE_KEY, &value).await?;
        debug!("profile saved under {}", PROFILE_KEY);
        Ok(())
    }
}

/// Holds the serialized profile in memory, the way browser storage holds a
/// JSON string.
#[derive(Default)]
pub struct MemoryProfileStore {
    raw: RwLock<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    pub async fn raw(&self) -> Option<String> {
        self.raw.read().await.clone()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<StudentProfile>, AppError> {
        Ok(decode(self.raw.read().await.clone()))
    }

    async fn save(&self, profile: &StudentProfile) -> Result<(), AppError> {
        let value = serde_json::to_string(profile)?;
        *self.raw.write().await = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Commuter, FormatPreference, Priority, TimeOfDay, Workload};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn sample_profile(name: &str) -> StudentProfile {
        StudentProfile {
            display_name: name.to_string(),
            standing: "junior".to_string(),
            college: "Social Sciences".to_string(),
            major: "Psychology".to_string(),
            minor: String::new(),
            priority: Priority::Ge,
            ge_needed: vec!["III".to_string(), "VII".to_string()],
            preferred_time: TimeOfDay::Afternoon,
            workload: Workload::Light,
            course_format: FormatPreference::Any,
            commuter: Commuter::Yes,
            completed_courses: vec!["PSYCH 7A".to_string()],
            quarter_target: "Spring 2027".to_string(),
            max_units: 12,
        }
    }

    #[tokio::test]
    async fn test_absent_key_is_no_profile() {
        let store = SqliteProfileStore::new(setup_test_db().await);
        let loaded = store.load().await.expect("Failed to load profile");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let pool = setup_test_db().await;
        let store = SqliteProfileStore::new(pool.clone());

        store.save(&sample_profile("first")).await.expect("Failed to save");
        store.save(&sample_profile("second")).await.expect("Failed to save");

        let loaded = store
            .load()
            .await
            .expect("Failed to load profile")
            .expect("Profile missing");
        assert_eq!(loaded, sample_profile("second"));

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM local_storage")
            .fetch_one(&pool)
            .await
            .expect("Failed to count rows");
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_corrupt_value_reads_as_no_profile() {
        let pool = setup_test_db().await;
        set_item(&pool, PROFILE_KEY, "{not json")
            .await
            .expect("Failed to write raw value");

        let store = SqliteProfileStore::new(pool);
        assert!(store.load().await.expect("load should not fail").is_none());
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryProfileStore::new();
        assert!(store.load().await.expect("Failed to load").is_none());

        store.save(&sample_profile("mem")).await.expect("Failed to save");
        let raw = store.raw().await.expect("raw value missing");
        assert!(raw.contains(r#""displayName":"mem""#));

        let corrupt = MemoryProfileStore::with_raw("null");
        assert!(corrupt.load().await.expect("Failed to load").is_none());
    }
}
