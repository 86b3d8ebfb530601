//! services/template_service.rs
//! CRUD de templates: list, create y update por id. A diferencia de las
//! conexiones, un update sobre un id inexistente es 404, no upsert.

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::errors::ApiError;
use crate::models::template_model::{CreateTemplateRequest, TemplateRecord};
use crate::services::document_store::{new_id, shallow_merge, DocumentStore};

pub const TEMPLATES_COLLECTION: &str = "templates";

#[derive(Clone)]
pub struct TemplateService {
    store: DocumentStore,
}

impl TemplateService {
    pub fn new(store: DocumentStore) -> Self {
        TemplateService { store }
    }

    pub fn list(&self) -> Vec<Value> {
        self.store.read(TEMPLATES_COLLECTION)
    }

    /// Crea un template. `id` y las fechas se asignan del lado del servidor.
    pub fn create(&self, req: CreateTemplateRequest) -> Result<Value> {
        let now = Utc::now().to_rfc3339();
        let record = TemplateRecord {
            id: new_id(),
            name: req.name,
            template_type: req.template_type,
            subject: req.subject,
            html_content: req.html_content,
            is_active: req.is_active,
            variables: req.variables,
            created_date: now.clone(),
            updated_date: now,
        };
        let value = serde_json::to_value(&record)?;

        let mut templates = self.store.read(TEMPLATES_COLLECTION);
        templates.push(value.clone());
        self.store.write(TEMPLATES_COLLECTION, &templates)?;
        Ok(value)
    }

    /// Merge superficial del patch sobre el template con ese id y refresco
    /// de `updated_date`. Id inexistente: 404 y la colección queda intacta.
    pub fn update(&self, id: &str, patch: &Value) -> Result<Value, ApiError> {
        let mut templates = self.store.read(TEMPLATES_COLLECTION);
        let position = templates
            .iter()
            .position(|template| template.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

        shallow_merge(&mut templates[position], patch);
        if let Some(record) = templates[position].as_object_mut() {
            record.insert(
                "updated_date".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        let updated = templates[position].clone();
        self.store.write(TEMPLATES_COLLECTION, &templates)?;
        Ok(updated)
    }
}
