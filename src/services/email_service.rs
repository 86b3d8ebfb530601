//! services/email_service.rs
//! Consultas sobre la colección de emails: listado, emails de recuperación
//! de carrito y el agregado de estadísticas del dashboard.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::stats_model::StatsResponse;
use crate::services::document_store::DocumentStore;
use crate::services::event_service::EMAILS_COLLECTION;

#[derive(Clone)]
pub struct EmailService {
    store: DocumentStore,
}

impl EmailService {
    pub fn new(store: DocumentStore) -> Self {
        EmailService { store }
    }

    pub fn list(&self) -> Vec<Value> {
        self.store.read(EMAILS_COLLECTION)
    }

    /// Solo los emails de recuperación de carrito abandonado.
    pub fn cart_recovery_emails(&self) -> Vec<Value> {
        self.list()
            .into_iter()
            .filter(|email| {
                email.get("type").and_then(Value::as_str) == Some("recuperacao_carrinho")
            })
            .collect()
    }

    /// Agregado recalculado en cada lectura. `sent_today` compara el día
    /// calendario UTC de `created_date` contra hoy; fechas ilegibles no
    /// cuentan. Las tasas quedan en 0 (stub documentado).
    pub fn stats(&self) -> StatsResponse {
        let emails = self.list();
        let today = Utc::now().date_naive();
        let sent_today = emails
            .iter()
            .filter(|email| {
                email
                    .get("created_date")
                    .and_then(Value::as_str)
                    .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                    .map(|date| date.with_timezone(&Utc).date_naive() == today)
                    .unwrap_or(false)
            })
            .count();

        StatsResponse {
            total_emails: emails.len(),
            sent_today,
            open_rate: 0,
            click_rate: 0,
        }
    }
}
