//! handlers/webhook_handler.rs
//! Endpoint de ingestión de eventos del sistema de vendas.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::config::app_config::AppConfig;
use crate::errors::ApiError;
use crate::services::event_service::EventService;

/// POST /api/remarketing-receive
///
/// El webhook tiene su propia API key (independiente de la del dashboard),
/// que el sistema de vendas manda en `X-API-Key`. El body se parsea a mano
/// para poder responder `Invalid JSON format.` como espera el emisor.
pub async fn receive_event_endpoint(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    event_service: web::Data<EventService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    if let Some(expected) = config.webhook_api_key.as_deref() {
        let provided = req
            .headers()
            .get("X-API-Key")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if provided != expected {
            return Err(ApiError::Auth("Unauthorized. Invalid API Key.".to_string()));
        }
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::Validation("Invalid JSON format.".to_string()))?;

    let response = event_service.process_event(&payload)?;
    Ok(HttpResponse::Ok().json(response))
}

/// Cualquier verbo distinto de POST sobre el endpoint de ingestión.
pub async fn method_not_allowed_endpoint() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(
        "Method not allowed. Use POST.".to_string(),
    ))
}
