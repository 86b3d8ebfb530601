//! errors.rs
//! Taxonomía de errores de la API. Cada variante mapea a un status HTTP y
//! todas las respuestas de error son JSON con al menos un campo `error`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Entrada inválida o faltante (400). Se corta antes de persistir nada.
    #[error("{0}")]
    Validation(String),
    /// Credencial ausente o incorrecta (401).
    #[error("{0}")]
    Auth(String),
    /// Ruta, recurso o id inexistente (404).
    #[error("{0}")]
    NotFound(String),
    /// Verbo HTTP no soportado por el recurso (405).
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Falla inesperada (500). El detalle va en `message`; no se filtra
    /// estado interno más allá del string.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Internal(source) => HttpResponse::build(self.status_code()).json(json!({
                "error": "Internal server error",
                "message": source.to_string(),
            })),
            other => HttpResponse::build(other.status_code()).json(json!({
                "error": other.to_string(),
            })),
        }
    }
}
