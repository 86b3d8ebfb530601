use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::connection_service::ConnectionService;
use crate::services::document_store::{DocumentStore, FileStorage};
use crate::services::email_service::EmailService;
use crate::services::event_service::EventService;
use crate::services::log_service::LogService;
use crate::services::settings_service::SettingsService;
use crate::services::template_service::TemplateService;
use crate::services::whatsapp_service::WhatsAppService;

mod app;
mod auth;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

fn setup_store(config: &AppConfig) -> DocumentStore {
    // Crear la carpeta de datos al arrancar; las colecciones aparecen a
    // medida que se escriben
    std::fs::create_dir_all(&config.data_dir)
        .expect("No se pudo crear el directorio de datos");
    log::info!("Colecciones JSON en {}", config.data_dir);

    DocumentStore::new(Arc::new(FileStorage::new(&config.data_dir)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        log::warn!("RMK_API_KEY no configurada; la API del dashboard queda abierta");
    }
    if config.webhook_api_key.is_none() {
        log::warn!("RMK_WEBHOOK_API_KEY no configurada; el webhook queda abierto");
    }

    let store = setup_store(&config);

    let log_service = LogService::new(store.clone());
    let event_service = EventService::new(store.clone(), log_service.clone());
    let email_service = EmailService::new(store.clone());
    let template_service = TemplateService::new(store.clone());
    let connection_service = ConnectionService::new(store.clone());
    let settings_service = SettingsService::new(store.clone());
    let whatsapp_service = WhatsAppService::new(store);

    let bind_addr = config.bind_addr.clone();
    log::info!("Levantando servidor en {}", bind_addr);
    HttpServer::new(move || {
        // El dashboard se sirve desde cualquier origen; preflight resuelto acá
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "X-API-Key"]);

        let config = config.clone();
        App::new()
            .wrap(cors)
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(log_service.clone()))
            .app_data(web::Data::new(event_service.clone()))
            .app_data(web::Data::new(email_service.clone()))
            .app_data(web::Data::new(template_service.clone()))
            .app_data(web::Data::new(connection_service.clone()))
            .app_data(web::Data::new(settings_service.clone()))
            .app_data(web::Data::new(whatsapp_service.clone()))
            .configure(move |cfg| app::init_app(cfg, &config))
    })
    .workers(1)
    .bind(bind_addr)?
    .run()
    .await
}
