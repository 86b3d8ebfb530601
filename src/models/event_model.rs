//! models/event_model.rs
//! Payloads de entrada del webhook de eventos. El decode es cerrado: si un
//! objeto anidado no tiene la forma esperada (por ejemplo `order` como
//! string), el evento se rechaza con 400 en vez de coercionarse en silencio.
//! Ausente y `null` valen lo mismo: objeto vacío.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderInfo {
    /// Los sistemas de venta mandan ids numéricos o string; se pasa tal cual.
    pub id: Option<Value>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInfo {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartInfo {
    pub value: Option<f64>,
    pub items: Option<Value>,
}

/// Cuerpo de `order_created` / `order_paid`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderEventData {
    #[serde(default)]
    pub order: Option<OrderInfo>,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
    #[serde(default)]
    pub product: Option<ProductInfo>,
    #[serde(default)]
    pub tracking: Option<Value>,
}

/// Cuerpo de `cart_abandoned`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartEventData {
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
    #[serde(default)]
    pub cart: Option<CartInfo>,
}
