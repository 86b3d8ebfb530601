//! handlers/mod.rs
//! Módulo que agrupa los handlers del API del dashboard y el webhook.

pub mod cart_recovery_handler;
pub mod connection_handler;
pub mod email_handler;
pub mod log_handler;
pub mod settings_handler;
pub mod stats_handler;
pub mod template_handler;
pub mod webhook_handler;
pub mod whatsapp_handler;
