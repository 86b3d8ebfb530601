//! logger.rs
//! Configuración del logger operacional usando env_logger. Esto es aparte
//! del log de eventos del dominio (colección `logs`).

use env_logger;

pub fn init_logger() {
    // Nivel desde RUST_LOG; default "info" si no está definida.
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .init();
}
