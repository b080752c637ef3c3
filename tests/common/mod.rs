use actix_web::{web, App};
use async_trait::async_trait;
use booking_admin_rust::{
    database, handlers,
    models::ServiceError,
    repositories::{SqlitePageViewRepository, SqliteSettingsRepository},
    services::{AnalyticsProducer, AnalyticsService, PageViewAnalytics, SettingsStore},
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Dashboard producer returning a canned result
pub struct StubProducer(pub Result<Option<Value>, String>);

#[async_trait]
impl AnalyticsProducer for StubProducer {
    async fn produce(&self) -> Result<Option<Value>, ServiceError> {
        self.0.clone().map_err(ServiceError::RemoteError)
    }
}

pub struct TestApp {
    pub pool: SqlitePool,
    pub settings_store: web::Data<SettingsStore>,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = database::connect(&database_url)
            .await
            .expect("Failed to initialize database");

        let settings_repository = Arc::new(SqliteSettingsRepository::new(pool.clone()));
        let settings_store = web::Data::new(SettingsStore::new(settings_repository));

        Self {
            pool,
            settings_store,
            temp_dir,
        }
    }

    pub fn create_app(
        &self,
        dashboard: StubProducer,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let page_view_repository = Arc::new(SqlitePageViewRepository::new(self.pool.clone()));
        let page_view_analytics = Arc::new(PageViewAnalytics::new(page_view_repository));
        let analytics_service = web::Data::new(AnalyticsService::new(
            Arc::new(dashboard),
            page_view_analytics.clone(),
        ));

        App::new()
            .app_data(self.settings_store.clone())
            .app_data(analytics_service)
            .app_data(web::Data::from(page_view_analytics))
            .configure(handlers::configure_routes)
    }

    pub async fn insert_page_view(&self, path: &str, created_at: DateTime<Utc>) {
        sqlx::query("INSERT INTO page_views (created_at, path, country, city, referrer) VALUES (?, ?, ?, ?, ?)")
            .bind(created_at)
            .bind(path)
            .bind("PT")
            .bind("Lisbon")
            .bind(Option::<String>::None)
            .execute(&self.pool)
            .await
            .expect("Failed to insert page view");
    }

    pub async fn insert_setting(&self, key: &str, value: &Value) {
        sqlx::query("INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value.to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to insert setting");
    }

    /// Insert a row whose stored value is taken verbatim, bypassing JSON encoding
    pub async fn insert_raw_setting(&self, key: &str, raw_value: &str) {
        sqlx::query("INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(raw_value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to insert setting");
    }

    pub async fn drop_table(&self, table: &str) {
        sqlx::query(&format!("DROP TABLE {}", table))
            .execute(&self.pool)
            .await
            .expect("Failed to drop table");
    }
}
