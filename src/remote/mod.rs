//! # API de reservas externo
//!
//! - [`models`] - tipos de transporte para reservas listadas y enviadas
//! - [`http`] - la abstracción `HttpClient` y su implementación con reqwest
//! - [`client`] - `ReservationsApi`, las llamadas GET/POST tipadas

pub mod client;
pub mod http;
pub mod models;

pub use client::ReservationsApi;
pub use http::ReqwestHttpClient;
pub use models::{NewReservation, Reservation};
