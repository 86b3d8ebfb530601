//! models/mod.rs
//! Módulo raíz para los registros persistidos y los payloads del webhook.

pub mod email_model;
pub mod event_model;
pub mod log_model;
pub mod stats_model;
pub mod template_model;
