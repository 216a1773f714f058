//! # Superficie HTTP
//!
//! - [`page`] - el tablero HTML (`GET /`, `POST /book`)
//! - [`reservation`] - endpoints JSON sobre el mismo tablero
//! - [`view`] - renderizado HTML
//! - [`errors`] - tipo de error de la aplicación
//! - [`middleware`] - logging de cadenas de errores

pub mod errors;
pub mod middleware;
pub mod page;
pub mod reservation;
pub mod view;

pub use errors::{AppError, AppResult};

use actix_web::{get, web, HttpResponse, Responder};

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Registra todas las rutas
///
/// - `/`, `/book` - ver [`page::routes`]
/// - `/api/*` - ver [`reservation::routes`]
/// - `/health`
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    page::routes(cfg);
    reservation::routes(cfg);
    cfg.service(health);
}
