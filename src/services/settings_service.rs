//! services/settings_service.rs
//! Preferencias del dashboard (remitente, dominio, notificaciones y los
//! toggles de recuperación de carrito). Colección singleton: 0 o 1 entradas.

use anyhow::Result;
use serde_json::Value;

use crate::services::document_store::DocumentStore;

pub const SETTINGS_COLLECTION: &str = "settings";

#[derive(Clone)]
pub struct SettingsService {
    store: DocumentStore,
}

impl SettingsService {
    pub fn new(store: DocumentStore) -> Self {
        SettingsService { store }
    }

    pub fn get(&self) -> Value {
        self.store.read_singleton(SETTINGS_COLLECTION)
    }

    /// PUTs sucesivos con campos disjuntos acumulan: el registro queda con
    /// la unión de todos los campos (merge, no reemplazo).
    pub fn upsert(&self, patch: &Value) -> Result<Value> {
        self.store.upsert_singleton(SETTINGS_COLLECTION, patch)
    }
}
