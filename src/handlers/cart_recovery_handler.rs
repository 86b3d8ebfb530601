//! handlers/cart_recovery_handler.rs
//! Vistas finas de recuperación de carrito: filtro sobre `emails` y el mismo
//! singleton de settings que /api/settings.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::email_service::EmailService;
use crate::services::settings_service::SettingsService;

/// GET /api/cart-recovery/emails
pub async fn list_recovery_emails_endpoint(service: web::Data<EmailService>) -> HttpResponse {
    HttpResponse::Ok().json(service.cart_recovery_emails())
}

/// PUT /api/cart-recovery/settings
pub async fn update_recovery_settings_endpoint(
    service: web::Data<SettingsService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let settings = service.upsert(&body.into_inner())?;
    Ok(HttpResponse::Ok().json(settings))
}
