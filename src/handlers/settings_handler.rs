//! handlers/settings_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::settings_service::SettingsService;

/// GET /api/settings
pub async fn get_settings_endpoint(service: web::Data<SettingsService>) -> HttpResponse {
    HttpResponse::Ok().json(service.get())
}

/// PUT /api/settings
pub async fn update_settings_endpoint(
    service: web::Data<SettingsService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let settings = service.upsert(&body.into_inner())?;
    Ok(HttpResponse::Ok().json(settings))
}
