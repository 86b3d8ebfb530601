//! services/mod.rs
//! Módulo que agrupa el almacenamiento de colecciones y la lógica por recurso.

pub mod connection_service;
pub mod document_store;
pub mod email_service;
pub mod event_service;
pub mod log_service;
pub mod settings_service;
pub mod template_service;
pub mod whatsapp_service;
