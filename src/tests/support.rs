//! tests/support.rs
//! Helpers compartidos: store en memoria y app de prueba con las mismas
//! rutas, auth y servicios que producción.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

use crate::app;
use crate::config::app_config::AppConfig;
use crate::services::connection_service::ConnectionService;
use crate::services::document_store::{DocumentStore, MemoryStorage};
use crate::services::email_service::EmailService;
use crate::services::event_service::EventService;
use crate::services::log_service::LogService;
use crate::services::settings_service::SettingsService;
use crate::services::template_service::TemplateService;
use crate::services::whatsapp_service::WhatsAppService;

pub fn memory_store() -> DocumentStore {
    DocumentStore::new(Arc::new(MemoryStorage::new()))
}

/// Config de prueba: todo abierto, directorios apuntando a /tmp.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        data_dir: std::env::temp_dir().display().to_string(),
        public_dir: std::env::temp_dir().display().to_string(),
        api_key: None,
        webhook_api_key: None,
    }
}

/// App completa sobre el store dado. Se pasa por `test::init_service`.
pub fn build_app(
    store: &DocumentStore,
    config: AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let log_service = LogService::new(store.clone());
    App::new()
        .app_data(web::Data::new(config.clone()))
        .app_data(web::Data::new(log_service.clone()))
        .app_data(web::Data::new(EventService::new(
            store.clone(),
            log_service,
        )))
        .app_data(web::Data::new(EmailService::new(store.clone())))
        .app_data(web::Data::new(TemplateService::new(store.clone())))
        .app_data(web::Data::new(ConnectionService::new(store.clone())))
        .app_data(web::Data::new(SettingsService::new(store.clone())))
        .app_data(web::Data::new(WhatsAppService::new(store.clone())))
        .configure(move |cfg| app::init_app(cfg, &config))
}
