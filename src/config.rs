//! # Configuración
//!
//! Se lee de variables de entorno (antes se carga un `.env` si existe):
//!
//! ```env
//! RESERVATIONS_API_URL=https://reservations-api-tt25.onrender.com
//! BIND_ADDRESS=0.0.0.0:8080
//! STATIC_DIR=./static
//! RUST_LOG=reservation_board=debug,actix_web=info
//! ```

use std::env;

use crate::api::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://reservations-api-tt25.onrender.com";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL base del API de reservas, sin barra final
    pub api_url: String,
    pub bind_address: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let api_url = lookup("RESERVATIONS_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "RESERVATIONS_API_URL must be an http(s) URL, got '{}'",
                api_url
            )));
        }

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            api_url,
            bind_address,
            static_dir,
        })
    }
}
