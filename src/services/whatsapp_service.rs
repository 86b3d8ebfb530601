//! services/whatsapp_service.rs
//! Recuperación por WhatsApp: config singleton, historial de mensajes y el
//! envío de prueba. No hay integración real con la API de WhatsApp Business;
//! el test devuelve un éxito simulado y los mensajes se siembran por fuera.

use anyhow::Result;
use serde_json::{json, Value};

use crate::services::document_store::DocumentStore;

pub const WHATSAPP_CONFIG_COLLECTION: &str = "whatsapp_config";
pub const WHATSAPP_MESSAGES_COLLECTION: &str = "whatsapp_messages";

#[derive(Clone)]
pub struct WhatsAppService {
    store: DocumentStore,
}

impl WhatsAppService {
    pub fn new(store: DocumentStore) -> Self {
        WhatsAppService { store }
    }

    /// Config singleton: enabled, phone_number, api_token, delay_minutes,
    /// message_template, include_cart_link, max_attempts.
    pub fn config(&self) -> Value {
        self.store.read_singleton(WHATSAPP_CONFIG_COLLECTION)
    }

    pub fn update_config(&self, patch: &Value) -> Result<Value> {
        self.store
            .upsert_singleton(WHATSAPP_CONFIG_COLLECTION, patch)
    }

    /// Historial de mensajes enviados. Sin path de creación acá: lo llena
    /// el proceso externo de envío.
    pub fn messages(&self) -> Vec<Value> {
        self.store.read(WHATSAPP_MESSAGES_COLLECTION)
    }

    /// Envío de prueba simulado.
    pub fn send_test(&self) -> Value {
        json!({ "success": true, "message": "Mensagem de teste enviada" })
    }
}
