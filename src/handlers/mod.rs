use actix_web::web;

pub mod analytics;
pub mod functions;
pub mod settings;
pub mod ui;

// Re-export all handler functions for easy importing
pub use analytics::*;
pub use functions::*;
pub use settings::*;
pub use ui::*;

/// Register every API route; shared by the server and the integration tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/admin/dashboard-analytics",
        web::get().to(dashboard_analytics_api),
    )
    .service(
        web::resource("/functions/analytics")
            .route(web::get().to(visitor_analytics_function))
            .default_service(web::route().to(method_not_allowed)),
    )
    .route("/api/settings", web::get().to(get_settings_api))
    .route("/api/settings/refresh", web::post().to(refresh_settings_api))
    .route("/api/settings/clear-error", web::post().to(clear_settings_error_api))
    .service(
        web::resource("/api/settings/{key}")
            .route(web::get().to(get_setting_api))
            .route(web::put().to(update_setting_api)),
    )
    .route("/api/ui/loading-indicator", web::get().to(loading_indicator_fragment));
}
