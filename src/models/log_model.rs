//! models/log_model.rs
//! Entradas del log de eventos (colección `logs`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origen de la entrada. Este servicio solo produce `event`; los demás
/// valores aparecen en datos sembrados por otros procesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    Event,
    WebhookBrevo,
    Send,
    CronRecovery,
    IntegrationError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub level: LogLevel,
    pub message: String,
    pub event_type: String,
    /// Payload original completo, tal como llegó.
    pub data: Value,
    /// Respuesta que devolvió el normalizador.
    pub response: Value,
    pub created_date: String,
    pub source: String,
}
