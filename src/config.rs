use anyhow::Context;
use std::time::Duration;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    AnalyticsPayload, ApiResponse, ErrorResponse, FunctionErrorResponse, MessageResponse,
    PageViewRecord, SettingResponse, SettingsEntry, SettingsState, UpdateSettingRequest,
    VisitorAnalytics,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Host name or address; resolved when the server binds
    pub host: String,
    pub port: u16,
    /// Hosted function returning the dashboard summary; unset disables it
    pub dashboard_analytics_url: Option<String>,
    pub service_api_key: Option<String>,
    pub remote_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let database_url =
            var("DATABASE_URL").unwrap_or_else(|| "sqlite:booking_admin.db?mode=rwc".to_string());

        let remote_timeout = var("REMOTE_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("REMOTE_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            database_url,
            host,
            port,
            dashboard_analytics_url: var("DASHBOARD_ANALYTICS_URL"),
            service_api_key: var("SERVICE_API_KEY"),
            remote_timeout,
        })
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::analytics::dashboard_analytics_api,
        handlers::functions::visitor_analytics_function,
        handlers::settings::get_settings_api,
        handlers::settings::refresh_settings_api,
        handlers::settings::get_setting_api,
        handlers::settings::update_setting_api,
        handlers::settings::clear_settings_error_api,
        handlers::ui::loading_indicator_fragment,
    ),
    components(schemas(
        AnalyticsPayload,
        ApiResponse,
        ErrorResponse,
        FunctionErrorResponse,
        MessageResponse,
        PageViewRecord,
        SettingResponse,
        SettingsEntry,
        SettingsState,
        UpdateSettingRequest,
        VisitorAnalytics,
    ))
)]
pub struct ApiDoc;
