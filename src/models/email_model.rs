//! models/email_model.rs
//! Registros de email derivados de los eventos del sistema de vendas.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tipo de email de remarketing. Los nombres en portugués son los que el
/// dashboard conoce; se serializan tal cual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    PedidoAprovado,
    AguardandoPagamento,
    RecuperacaoCarrinho,
    Rastreio,
    CompraCancelada,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Sent,
    Delivered,
    Opened,
    Clicked,
    Bounced,
    Error,
}

/// Registro persistido en la colección `emails`. Se crea una sola vez desde
/// el normalizador de eventos y no se muta después.
///
/// `status` siempre nace en `sent`: el normalizador registra la intención de
/// envío, no una transmisión confirmada (el envío real está stubbeado).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub status: EmailStatus,
    pub created_date: String,
    // Campos de eventos de pedido
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Value>,
    // Campos de carrito abandonado
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<Value>,
    // Campos de seguimiento post-envío (los llena un proceso externo)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_at: Option<String>,
}
