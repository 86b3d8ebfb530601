//! models/template_model.rs
//! Templates de email del dashboard.

use serde::{Deserialize, Serialize};

/// Cuerpo del POST de creación. `id`, `created_date` y `updated_date` los
/// asigna el servidor; cualquier valor que mande el cliente se ignora.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub subject: String,
    pub html_content: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub variables: Vec<String>,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub subject: String,
    pub html_content: String,
    pub is_active: bool,
    /// Placeholders disponibles en el HTML, en orden.
    pub variables: Vec<String>,
    pub created_date: String,
    pub updated_date: String,
}
