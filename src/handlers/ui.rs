use actix_web::{http::header::ContentType, web, HttpResponse, Result};
use serde::Deserialize;
use utoipa::{self, IntoParams};

use crate::components::{IndicatorSize, LoadingIndicator};
use crate::models::ServiceError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoadingIndicatorQuery {
    /// One of `sm`, `md`, `lg`; anything else renders `md`
    pub size: Option<String>,
    /// Extra classes appended to the wrapper
    pub class: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/ui/loading-indicator",
    params(LoadingIndicatorQuery),
    responses(
        (status = 200, description = "Loading indicator HTML fragment", body = String, content_type = "text/html")
    )
)]
pub async fn loading_indicator_fragment(
    query: web::Query<LoadingIndicatorQuery>,
) -> Result<HttpResponse, ServiceError> {
    let query = query.into_inner();
    let size = query
        .size
        .as_deref()
        .and_then(|s| s.parse::<IndicatorSize>().ok())
        .unwrap_or_default();

    let mut indicator = LoadingIndicator::new(size);
    if let Some(class) = query.class.filter(|c| !c.trim().is_empty()) {
        indicator = indicator.with_class(class);
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(indicator.render()?))
}
