//! handlers/email_handler.rs

use actix_web::{web, HttpResponse};

use crate::services::email_service::EmailService;

/// GET /api/emails
pub async fn list_emails_endpoint(email_service: web::Data<EmailService>) -> HttpResponse {
    HttpResponse::Ok().json(email_service.list())
}
