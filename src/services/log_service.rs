//! services/log_service.rs
//! Log de eventos del webhook: append-only con retención de los últimos 1000
//! (se descartan los más viejos primero, tipo ring buffer).

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::models::log_model::{LogEntry, LogLevel, LogType};
use crate::services::document_store::{new_id, DocumentStore};

pub const LOGS_COLLECTION: &str = "logs";
const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Clone)]
pub struct LogService {
    store: DocumentStore,
}

impl LogService {
    pub fn new(store: DocumentStore) -> Self {
        LogService { store }
    }

    /// Registra un evento recibido con el payload completo y la respuesta
    /// del normalizador. Best-effort: si la escritura falla se avisa por el
    /// log operacional y la respuesta del webhook no se ve afectada.
    pub fn log_event(&self, event_type: &str, data: &Value, response: &Value) {
        let entry = LogEntry {
            id: new_id(),
            log_type: LogType::Event,
            level: LogLevel::Info,
            message: format!("Event received: {}", event_type),
            event_type: event_type.to_string(),
            data: data.clone(),
            response: response.clone(),
            created_date: Utc::now().to_rfc3339(),
            source: "remarketing-receive".to_string(),
        };
        if let Err(e) = self.append(entry) {
            log::warn!("No se pudo registrar el evento '{}': {:?}", event_type, e);
        }
    }

    fn append(&self, entry: LogEntry) -> Result<()> {
        let mut logs = self.store.read(LOGS_COLLECTION);
        logs.push(serde_json::to_value(entry)?);
        if logs.len() > MAX_LOG_ENTRIES {
            let excess = logs.len() - MAX_LOG_ENTRIES;
            logs.drain(..excess);
        }
        self.store.write(LOGS_COLLECTION, &logs)
    }

    /// Lista el log, opcionalmente filtrado por el campo `type`.
    pub fn list(&self, type_filter: Option<&str>) -> Vec<Value> {
        let logs = self.store.read(LOGS_COLLECTION);
        match type_filter {
            Some(wanted) => logs
                .into_iter()
                .filter(|entry| entry.get("type").and_then(Value::as_str) == Some(wanted))
                .collect(),
            None => logs,
        }
    }
}
