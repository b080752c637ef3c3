use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{ApiResponse, ServiceError, SettingResponse, UpdateSettingRequest};
use crate::services::{SettingsStore, UPDATE_SETTING_ERROR};

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current settings cache state", body = SettingsState)
    )
)]
pub async fn get_settings_api(store: web::Data<SettingsStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.snapshot())
}

#[utoipa::path(
    post,
    path = "/api/settings/refresh",
    responses(
        (status = 200, description = "Settings reloaded; `error` reports a failed fetch", body = SettingsState)
    )
)]
pub async fn refresh_settings_api(store: web::Data<SettingsStore>) -> HttpResponse {
    store.fetch_settings().await;
    HttpResponse::Ok().json(store.snapshot())
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Cached setting value", body = SettingResponse),
        (status = 404, description = "Setting not cached", body = ErrorResponse)
    )
)]
pub async fn get_setting_api(
    store: web::Data<SettingsStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let key = path.into_inner();
    let value = store
        .get_setting(&key)
        .ok_or_else(|| ServiceError::NotFound(format!("Setting {} not found", key)))?;

    Ok(HttpResponse::Ok().json(SettingResponse { key, value }))
}

#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    request_body = UpdateSettingRequest,
    responses(
        (status = 200, description = "Setting saved", body = ApiResponse),
        (status = 400, description = "Empty key", body = ErrorResponse),
        (status = 500, description = "Setting could not be saved", body = ApiResponse)
    )
)]
pub async fn update_setting_api(
    store: web::Data<SettingsStore>,
    path: web::Path<String>,
    body: web::Json<UpdateSettingRequest>,
) -> Result<HttpResponse, ServiceError> {
    let key = path.into_inner();
    if key.trim().is_empty() {
        return Err(ServiceError::ValidationError("Setting key is required".to_string()));
    }

    if store.update_setting(&key, body.into_inner().value).await {
        Ok(HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: format!("Setting {} updated successfully", key),
        }))
    } else {
        Ok(HttpResponse::InternalServerError().json(ApiResponse {
            success: false,
            message: UPDATE_SETTING_ERROR.to_string(),
        }))
    }
}

#[utoipa::path(
    post,
    path = "/api/settings/clear-error",
    responses(
        (status = 200, description = "Error cleared", body = SettingsState)
    )
)]
pub async fn clear_settings_error_api(store: web::Data<SettingsStore>) -> HttpResponse {
    store.clear_error();
    HttpResponse::Ok().json(store.snapshot())
}
