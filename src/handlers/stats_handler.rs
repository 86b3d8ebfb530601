//! handlers/stats_handler.rs

use actix_web::{web, HttpResponse};

use crate::services::email_service::EmailService;

/// GET /api/stats
pub async fn get_stats_endpoint(service: web::Data<EmailService>) -> HttpResponse {
    HttpResponse::Ok().json(service.stats())
}
