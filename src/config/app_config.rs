//! config/app_config.rs
//! Configuración global del servicio, leída del entorno (.env vía dotenv).

/// Variables reconocidas:
/// - `RMK_BIND`            dirección de escucha (default 0.0.0.0:5022)
/// - `RMK_DATA_DIR`        carpeta de las colecciones JSON (default ./data)
/// - `RMK_PUBLIC_DIR`      build del dashboard React (default ./public)
/// - `RMK_API_KEY`         key del dashboard; sin definir = API abierta
/// - `RMK_WEBHOOK_API_KEY` key del webhook de ingestión; sin definir = abierto
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: String,
    pub public_dir: String,
    pub api_key: Option<String>,
    pub webhook_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            bind_addr: env_or("RMK_BIND", "0.0.0.0:5022"),
            data_dir: env_or("RMK_DATA_DIR", "./data"),
            public_dir: env_or("RMK_PUBLIC_DIR", "./public"),
            api_key: env_non_empty("RMK_API_KEY"),
            webhook_api_key: env_non_empty("RMK_WEBHOOK_API_KEY"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_string())
}

/// Una variable definida pero vacía cuenta como no definida.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
