use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use booking_admin_rust::config::{ApiDoc, AppConfig};
use booking_admin_rust::database;
use booking_admin_rust::handlers;
use booking_admin_rust::openapi_config::configure_openapi;
use booking_admin_rust::repositories::{SqlitePageViewRepository, SqliteSettingsRepository};
use booking_admin_rust::services::{
    AnalyticsService, PageViewAnalytics, RemoteAnalyticsProducer, SettingsStore,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::connect(&config.database_url).await?;

    // Initialize repositories
    let settings_repository = Arc::new(SqliteSettingsRepository::new(pool.clone()));
    let page_view_repository = Arc::new(SqlitePageViewRepository::new(pool.clone()));

    // One settings cache per process, warmed before serving
    let settings_store = web::Data::new(SettingsStore::new(settings_repository));
    settings_store.fetch_settings().await;
    if let Some(error) = settings_store.error() {
        tracing::warn!("Starting with an empty settings cache: {}", error);
    }

    let page_view_analytics = Arc::new(PageViewAnalytics::new(page_view_repository));
    let dashboard_producer = Arc::new(RemoteAnalyticsProducer::new(
        config.dashboard_analytics_url.clone(),
        config.service_api_key.clone(),
        config.remote_timeout,
    )?);
    let analytics_service = web::Data::new(AnalyticsService::new(
        dashboard_producer,
        page_view_analytics.clone(),
    ));
    let page_view_analytics = web::Data::from(page_view_analytics);

    let public_url = config.public_url();
    tracing::info!("Booking admin server listening on {}", public_url);
    tracing::info!("API documentation: {}/swagger-ui/", public_url);

    let openapi_spec = configure_openapi(ApiDoc::openapi(), &public_url);

    HttpServer::new(move || {
        App::new()
            .app_data(settings_store.clone())
            .app_data(analytics_service.clone())
            .app_data(page_view_analytics.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
