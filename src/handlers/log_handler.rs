//! handlers/log_handler.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::services::log_service::LogService;

#[derive(Deserialize)]
pub struct LogsQuery {
    #[serde(rename = "type")]
    log_type: Option<String>,
}

/// GET /api/logs[?type=event]
pub async fn list_logs_endpoint(
    service: web::Data<LogService>,
    query: web::Query<LogsQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(service.list(query.log_type.as_deref()))
}
