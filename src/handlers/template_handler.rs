//! handlers/template_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::ApiError;
use crate::models::template_model::CreateTemplateRequest;
use crate::services::template_service::TemplateService;

/// GET /api/templates
pub async fn list_templates_endpoint(service: web::Data<TemplateService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list())
}

/// POST /api/templates
pub async fn create_template_endpoint(
    service: web::Data<TemplateService>,
    body: web::Json<CreateTemplateRequest>,
) -> Result<HttpResponse, ApiError> {
    let created = service.create(body.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/templates/{id}
pub async fn update_template_endpoint(
    service: web::Data<TemplateService>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let updated = service.update(&id, &body.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}
