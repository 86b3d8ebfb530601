//! services/connection_service.rs
//! Conexiones externas (brevo, sales_system, ...), a lo sumo un registro por
//! `type`. El PUT es un upsert: un type inexistente se crea con defaults en
//! vez de devolver 404. Esa asimetría contra templates es intencional.

use serde_json::{Map, Value};

use crate::errors::ApiError;
use crate::services::document_store::{new_id, shallow_merge, DocumentStore};

pub const CONNECTIONS_COLLECTION: &str = "connections";

#[derive(Clone)]
pub struct ConnectionService {
    store: DocumentStore,
}

impl ConnectionService {
    pub fn new(store: DocumentStore) -> Self {
        ConnectionService { store }
    }

    pub fn list(&self) -> Vec<Value> {
        self.store.read(CONNECTIONS_COLLECTION)
    }

    pub fn get_by_type(&self, conn_type: &str) -> Result<Value, ApiError> {
        self.list()
            .into_iter()
            .find(|conn| conn.get("type").and_then(Value::as_str) == Some(conn_type))
            .ok_or_else(|| ApiError::NotFound("Connection not found".to_string()))
    }

    /// Upsert por `type`. Si existe, merge superficial del patch; si no,
    /// se crea `{ ...patch, type, id nuevo, status: "disconnected" }` (el
    /// status del patch gana si viene). El segmento de la ruta es la clave
    /// natural: el body no puede moverla.
    pub fn upsert(&self, conn_type: &str, patch: &Value) -> Result<Value, ApiError> {
        let mut connections = self.store.read(CONNECTIONS_COLLECTION);
        let existing = connections
            .iter()
            .position(|conn| conn.get("type").and_then(Value::as_str) == Some(conn_type));

        let updated = match existing {
            Some(position) => {
                shallow_merge(&mut connections[position], patch);
                if let Some(record) = connections[position].as_object_mut() {
                    record.insert("type".to_string(), Value::String(conn_type.to_string()));
                }
                connections[position].clone()
            }
            None => {
                let mut record: Map<String, Value> =
                    patch.as_object().cloned().unwrap_or_default();
                record.insert("type".to_string(), Value::String(conn_type.to_string()));
                record.insert("id".to_string(), Value::String(new_id()));
                record
                    .entry("status".to_string())
                    .or_insert_with(|| Value::String("disconnected".to_string()));
                let record = Value::Object(record);
                connections.push(record.clone());
                record
            }
        };

        self.store.write(CONNECTIONS_COLLECTION, &connections)?;
        Ok(updated)
    }
}
