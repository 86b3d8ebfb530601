//! handlers/whatsapp_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::whatsapp_service::WhatsAppService;

/// GET /api/whatsapp/config
pub async fn get_config_endpoint(service: web::Data<WhatsAppService>) -> HttpResponse {
    HttpResponse::Ok().json(service.config())
}

/// PUT /api/whatsapp/config
pub async fn update_config_endpoint(
    service: web::Data<WhatsAppService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let config = service.update_config(&body.into_inner())?;
    Ok(HttpResponse::Ok().json(config))
}

/// GET /api/whatsapp/messages
pub async fn list_messages_endpoint(service: web::Data<WhatsAppService>) -> HttpResponse {
    HttpResponse::Ok().json(service.messages())
}

/// POST /api/whatsapp/test — envío simulado; el body (phone, message) se
/// acepta y se descarta.
pub async fn send_test_endpoint(
    service: web::Data<WhatsAppService>,
    _body: web::Bytes,
) -> HttpResponse {
    HttpResponse::Ok().json(service.send_test())
}
