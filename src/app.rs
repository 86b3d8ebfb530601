//! app.rs
//! Tabla de rutas explícita: cada recurso declara sus verbos y un default de
//! 405, y el scope del dashboard cierra con el 404 genérico. Así el contrato
//! upsert-vs-404 (connections vs templates) queda a la vista y testeado.

use actix_files::Files;
use actix_web::{web, HttpResponse};

use crate::auth::ApiKeyAuth;
use crate::config::app_config::AppConfig;
use crate::errors::ApiError;
use crate::handlers::{
    cart_recovery_handler, connection_handler, email_handler, log_handler, settings_handler,
    stats_handler, template_handler, webhook_handler, whatsapp_handler,
};

pub fn init_app(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|_err, _req| {
        ApiError::Validation("Invalid JSON format.".to_string()).into()
    }));

    cfg.service(
        web::scope("/api")
            // Webhook de ingestión: autenticación propia, fuera de la key
            // del dashboard
            .service(
                web::resource("/remarketing-receive")
                    .route(web::post().to(webhook_handler::receive_event_endpoint))
                    .default_service(
                        web::route().to(webhook_handler::method_not_allowed_endpoint),
                    ),
            )
            .service(
                web::scope("")
                    .wrap(ApiKeyAuth::new(config.api_key.clone()))
                    .service(
                        web::resource("/emails")
                            .route(web::get().to(email_handler::list_emails_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/templates")
                            .route(web::get().to(template_handler::list_templates_endpoint))
                            .route(web::post().to(template_handler::create_template_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/templates/{id}")
                            .route(web::put().to(template_handler::update_template_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/connections")
                            .route(web::get().to(connection_handler::list_connections_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/connections/{type}")
                            .route(web::get().to(connection_handler::get_connection_endpoint))
                            .route(web::put().to(connection_handler::upsert_connection_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/settings")
                            .route(web::get().to(settings_handler::get_settings_endpoint))
                            .route(web::put().to(settings_handler::update_settings_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/cart-recovery/emails")
                            .route(
                                web::get().to(cart_recovery_handler::list_recovery_emails_endpoint),
                            )
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/cart-recovery/settings")
                            .route(
                                web::put()
                                    .to(cart_recovery_handler::update_recovery_settings_endpoint),
                            )
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/whatsapp/config")
                            .route(web::get().to(whatsapp_handler::get_config_endpoint))
                            .route(web::put().to(whatsapp_handler::update_config_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/whatsapp/messages")
                            .route(web::get().to(whatsapp_handler::list_messages_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/whatsapp/test")
                            .route(web::post().to(whatsapp_handler::send_test_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/logs")
                            .route(web::get().to(log_handler::list_logs_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/stats")
                            .route(web::get().to(stats_handler::get_stats_endpoint))
                            .default_service(web::route().to(method_not_allowed)),
                    )
                    .default_service(web::route().to(route_not_found)),
            ),
    );

    // Build del dashboard React; presentación pura, sin lógica del lado Rust
    cfg.service(Files::new("/", &config.public_dir).index_file("index.html"));
}

/// Verbo no soportado sobre un recurso conocido.
async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed("Method not allowed".to_string()))
}

/// Ruta desconocida bajo /api.
async fn route_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound("Route not found".to_string()))
}
