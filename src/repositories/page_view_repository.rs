use crate::models::{PageViewRecord, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait PageViewRepository: Send + Sync {
    /// All page views, newest first
    async fn find_all_recent_first(&self) -> Result<Vec<PageViewRecord>, ServiceError>;
}

pub struct SqlitePageViewRepository {
    pool: SqlitePool,
}

impl SqlitePageViewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageViewRepository for SqlitePageViewRepository {
    async fn find_all_recent_first(&self) -> Result<Vec<PageViewRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, PageViewRecord>(
            "SELECT id, created_at, path, country, city, referrer
             FROM page_views
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
