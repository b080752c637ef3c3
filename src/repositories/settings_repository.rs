use crate::models::{ServiceError, SettingsEntry, SettingsRow};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<SettingsEntry>, ServiceError>;
    /// Insert or overwrite the row identified by `entry.key`
    async fn upsert(&self, entry: &SettingsEntry) -> Result<(), ServiceError>;
}

pub struct SqliteSettingsRepository {
    pool: SqlitePool,
}

impl SqliteSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn find_all(&self) -> Result<Vec<SettingsEntry>, ServiceError> {
        let rows = sqlx::query_as::<_, SettingsRow>(
            "SELECT key, value, updated_at FROM settings ORDER BY key",
        )
        .fetch_all(&self.pool)
        .await?;

        let settings = rows
            .into_iter()
            .map(SettingsEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(settings)
    }

    async fn upsert(&self, entry: &SettingsEntry) -> Result<(), ServiceError> {
        let encoded = serde_json::to_string(&entry.value)?;

        sqlx::query(
            "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(&entry.key)
        .bind(encoded)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
