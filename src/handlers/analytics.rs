use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{web, HttpResponse};
use utoipa;

use crate::models::{AnalyticsOutcome, MessageResponse};
use crate::services::AnalyticsService;

pub const INCOMPLETE_ANALYTICS_MESSAGE: &str = "Couldn't generate all analytics data";
pub const ANALYTICS_FALLBACK_MESSAGE: &str = "An internal server error occurred";

#[utoipa::path(
    get,
    path = "/api/admin/dashboard-analytics",
    responses(
        (status = 200, description = "Combined booking and visitor analytics", body = AnalyticsPayload),
        (status = 500, description = "Analytics could not be generated", body = MessageResponse)
    )
)]
pub async fn dashboard_analytics_api(
    analytics_service: web::Data<AnalyticsService>,
) -> HttpResponse {
    let no_store = CacheControl(vec![CacheDirective::NoStore]);

    match analytics_service.dashboard_analytics().await {
        Ok(AnalyticsOutcome::Complete(payload)) => {
            HttpResponse::Ok().insert_header(no_store).json(payload)
        }
        Ok(AnalyticsOutcome::Incomplete) => {
            tracing::warn!("Dashboard analytics incomplete: a producer returned no data");
            HttpResponse::InternalServerError()
                .insert_header(no_store)
                .json(MessageResponse {
                    message: INCOMPLETE_ANALYTICS_MESSAGE.to_string(),
                })
        }
        Err(e) => {
            tracing::error!("Error generating dashboard analytics: {}", e);
            let message = match e.message() {
                "" => ANALYTICS_FALLBACK_MESSAGE.to_string(),
                msg => msg.to_string(),
            };
            HttpResponse::InternalServerError()
                .insert_header(no_store)
                .json(MessageResponse { message })
        }
    }
}
