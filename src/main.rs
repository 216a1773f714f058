//! # Reservation Board
//!
//! Tablero de reservas de restaurante en una sola página, construido con Rust
//! y Actix Web. Lista las reservas de un API remoto y crea nuevas a través de
//! un formulario validado.
//!
//! ## Configuración
//!
//! Variables de entorno (se carga un `.env` si existe):
//!
//! ```env
//! RESERVATIONS_API_URL=https://reservations-api-tt25.onrender.com
//! BIND_ADDRESS=0.0.0.0:8080
//! STATIC_DIR=./static
//! RUST_LOG=reservation_board=debug,actix_web=info
//! ```
//!
//! ## Arquitectura
//!
//! ```text
//! Browser (HTML form) / JSON clients
//!     ↓ HTTP
//! Actix Web (api)
//!     ↓
//! ReservationBoard (board)
//!     ↓ HTTP/JSON (reqwest)
//! Remote reservations API
//! ```

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod api;
mod board;
mod config;
mod remote;

use board::ReservationBoard;
use config::Config;
use remote::{ReqwestHttpClient, ReservationsApi};

const DEFAULT_LOG_FILTER: &str = "reservation_board=debug,actix_web=info";

/// Arranca el servidor del tablero
///
/// 1. Carga `.env` y configura tracing
/// 2. Lee la configuración
/// 3. Carga la lista de reservas una vez
/// 4. Sirve el tablero, el API JSON y los archivos estáticos
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    tracing::info!(api_url = %config.api_url, "Starting reservation board");

    let api = ReservationsApi::new(&config.api_url, Arc::new(ReqwestHttpClient::default()));
    let board = web::Data::new(ReservationBoard::new(api));
    board.refresh_list().await;

    tracing::info!("Listening on {}", config.bind_address);
    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(board.clone())
            .wrap(Logger::default())
            .configure(api::init_routes)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
