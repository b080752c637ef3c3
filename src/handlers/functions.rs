use actix_web::{web, HttpResponse};
use utoipa;

use crate::models::FunctionErrorResponse;
use crate::services::PageViewAnalytics;

#[utoipa::path(
    get,
    path = "/functions/analytics",
    responses(
        (status = 200, description = "Page views, newest first", body = VisitorAnalytics),
        (status = 405, description = "Only GET is supported", body = FunctionErrorResponse),
        (status = 500, description = "Page views could not be read", body = FunctionErrorResponse)
    )
)]
pub async fn visitor_analytics_function(analytics: web::Data<PageViewAnalytics>) -> HttpResponse {
    match analytics.visitor_analytics().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            tracing::error!("Error reading page views: {}", e);
            HttpResponse::InternalServerError().json(FunctionErrorResponse {
                error: "Internal Server Error".to_string(),
            })
        }
    }
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(FunctionErrorResponse {
        error: "Method Not Allowed".to_string(),
    })
}
