//! services/event_service.rs
//! Normalizador de eventos: convierte un payload del webhook en cero o un
//! `EmailRecord` más exactamente una entrada en el log de eventos.

use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::models::email_model::{EmailRecord, EmailStatus, EmailType};
use crate::models::event_model::{CartEventData, OrderEventData};
use crate::services::document_store::{new_id, DocumentStore};
use crate::services::log_service::LogService;

pub const EMAILS_COLLECTION: &str = "emails";

#[derive(Clone)]
pub struct EventService {
    store: DocumentStore,
    log_service: LogService,
}

impl EventService {
    pub fn new(store: DocumentStore, log_service: LogService) -> Self {
        EventService { store, log_service }
    }

    /// Procesa un evento ya autenticado y devuelve el cuerpo de la respuesta.
    /// Los errores de validación cortan acá, antes de persistir o loguear
    /// nada. Un evento desconocido no genera email pero sí queda logueado.
    pub fn process_event(&self, payload: &Value) -> Result<Value, ApiError> {
        if !payload.is_object() {
            return Err(ApiError::Validation("Invalid JSON format.".to_string()));
        }
        let event_type = payload
            .get("event_type")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Validation("Missing event_type.".to_string()))?
            .to_string();

        let response = match event_type.as_str() {
            "order_created" | "order_paid" => self.process_order_event(&event_type, payload)?,
            "cart_abandoned" => self.process_cart_abandoned(payload)?,
            _ => json!({
                "success": true,
                "message": "Event received but not processed",
                "event_type": event_type,
            }),
        };

        self.log_service.log_event(&event_type, payload, &response);
        Ok(response)
    }

    fn process_order_event(&self, event_type: &str, payload: &Value) -> Result<Value, ApiError> {
        let data: OrderEventData = decode_event(payload)?;
        let order = data.order.unwrap_or_default();
        let customer = data.customer.unwrap_or_default();
        let product = data.product.unwrap_or_default();
        let paid = event_type == "order_paid";

        let record = EmailRecord {
            id: new_id(),
            email_type: if paid {
                EmailType::PedidoAprovado
            } else {
                EmailType::AguardandoPagamento
            },
            customer_name: customer.name.unwrap_or_else(|| "Cliente".to_string()),
            customer_email: customer.email.unwrap_or_default(),
            subject: if paid {
                "Seu pedido foi aprovado! 🎉".to_string()
            } else {
                "Aguardando seu pagamento".to_string()
            },
            status: EmailStatus::Sent,
            created_date: chrono::Utc::now().to_rfc3339(),
            order_id: Some(order.id.unwrap_or_else(|| Value::String(String::new()))),
            order_value: Some(order.value.unwrap_or(0.0)),
            product_name: Some(product.name.unwrap_or_default()),
            tracking: Some(data.tracking.unwrap_or_else(|| json!([]))),
            cart_value: None,
            cart_items: None,
            error_message: None,
            opened_at: None,
            clicked_at: None,
        };
        let email_id = record.id.clone();
        self.save_email(record)?;

        Ok(json!({
            "success": true,
            "message": "Order event processed",
            "event_type": event_type,
            "email_id": email_id,
        }))
    }

    fn process_cart_abandoned(&self, payload: &Value) -> Result<Value, ApiError> {
        let data: CartEventData = decode_event(payload)?;
        let customer = data.customer.unwrap_or_default();
        let cart = data.cart.unwrap_or_default();

        let record = EmailRecord {
            id: new_id(),
            email_type: EmailType::RecuperacaoCarrinho,
            customer_name: customer.name.unwrap_or_else(|| "Cliente".to_string()),
            customer_email: customer.email.unwrap_or_default(),
            subject: "Você esqueceu algo no carrinho!".to_string(),
            status: EmailStatus::Sent,
            created_date: chrono::Utc::now().to_rfc3339(),
            order_id: None,
            order_value: None,
            product_name: None,
            tracking: None,
            cart_value: Some(cart.value.unwrap_or(0.0)),
            cart_items: Some(cart.items.unwrap_or_else(|| json!([]))),
            error_message: None,
            opened_at: None,
            clicked_at: None,
        };
        let email_id = record.id.clone();
        self.save_email(record)?;

        // La respuesta original de carrito no trae event_type; se conserva.
        Ok(json!({
            "success": true,
            "message": "Cart abandoned event processed",
            "email_id": email_id,
        }))
    }

    fn save_email(&self, record: EmailRecord) -> Result<(), ApiError> {
        let mut emails = self.store.read(EMAILS_COLLECTION);
        emails.push(serde_json::to_value(record).map_err(anyhow::Error::from)?);
        self.store.write(EMAILS_COLLECTION, &emails)?;
        Ok(())
    }
}

/// Decode cerrado del cuerpo del evento: una forma anidada inesperada
/// rechaza el evento con 400 en lugar de coercionarse.
fn decode_event<T: serde::de::DeserializeOwned>(payload: &Value) -> Result<T, ApiError> {
    serde_json::from_value(payload.clone())
        .map_err(|e| ApiError::Validation(format!("Invalid event payload: {}", e)))
}
