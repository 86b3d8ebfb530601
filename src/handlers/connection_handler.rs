//! handlers/connection_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::connection_service::ConnectionService;

/// GET /api/connections
pub async fn list_connections_endpoint(service: web::Data<ConnectionService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list())
}

/// GET /api/connections/{type}
pub async fn get_connection_endpoint(
    service: web::Data<ConnectionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn_type = path.into_inner();
    let connection = service.get_by_type(&conn_type)?;
    Ok(HttpResponse::Ok().json(connection))
}

/// PUT /api/connections/{type} — upsert, no 404.
pub async fn upsert_connection_endpoint(
    service: web::Data<ConnectionService>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let conn_type = path.into_inner();
    let connection = service.upsert(&conn_type, &body.into_inner())?;
    Ok(HttpResponse::Ok().json(connection))
}
