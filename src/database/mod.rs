use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

/// Open the pool, creating the database file if needed, and apply migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
        tracing::info!("Created database {}", database_url);
    }

    let pool = SqlitePool::connect(database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database initialized successfully");
    Ok(pool)
}
