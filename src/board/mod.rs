//! # Tablero de reservas
//!
//! El tablero compartido por todas las peticiones guarda solo la última lista
//! de reservas. El borrador del formulario y el banner pertenecen a cada
//! petición: [`ReservationBoard::submit`] los devuelve en un [`BookingOutcome`]
//! y nunca se comparten entre visitantes.
//!
//! - [`validation`] - comprobaciones del borrador antes de enviar nada
//! - [`status`] - el resultado etiquetado que se muestra como banner
//! - [`format`] - formato de fechas para las tarjetas

pub mod format;
pub mod status;
pub mod validation;

pub use status::BookingStatus;
pub use validation::DraftReservation;

use tokio::sync::RwLock;

use crate::api::middleware::ErrorLogExt;
use crate::remote::{Reservation, ReservationsApi};
use status::{SubmissionFailure, DEFAULT_SUCCESS_MESSAGE};

/// Lo que una petición renderiza además de la lista: banner y valores del formulario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingOutcome {
    pub status: BookingStatus,
    /// Vacío tras un éxito; el borrador enviado en cualquier otro caso
    pub draft: DraftReservation,
}

/// Lista de reservas más el API del que se carga y al que se envía
///
/// El lock nunca se mantiene durante una llamada remota, así que los envíos
/// corren en paralelo y no se deduplican.
#[derive(Debug)]
pub struct ReservationBoard {
    api: ReservationsApi,
    reservations: RwLock<Vec<Reservation>>,
}

impl ReservationBoard {
    pub fn new(api: ReservationsApi) -> Self {
        Self {
            api,
            reservations: RwLock::new(Vec::new()),
        }
    }

    /// Copia de la lista actual para renderizar
    pub async fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().await.clone()
    }

    /// Sustituye la lista por una copia nueva del API
    ///
    /// Los fallos se registran y la lista anterior se mantiene.
    pub async fn refresh_list(&self) {
        let fetched = self
            .api
            .list_reservations()
            .await
            .log_error_level(tracing::Level::WARN, "loading reservation list");

        if let Ok(reservations) = fetched {
            tracing::debug!(count = reservations.len(), "Reservation list refreshed");
            *self.reservations.write().await = reservations;
        }
    }

    /// Ejecuta un intento de reserva con el borrador dado
    ///
    /// Un fallo de validación no envía nada ni recarga la lista. Cualquier
    /// envío que llegó a salir recarga la lista al terminar. Toda respuesta
    /// JSON cuenta como éxito y vacía el borrador; sin respuesta JSON el
    /// borrador se conserva.
    pub async fn submit(&self, draft: DraftReservation) -> BookingOutcome {
        let payload = match validation::validate(&draft) {
            Ok(payload) => payload,
            Err(reason) => {
                tracing::info!(reason = %reason, "Reservation draft rejected");
                return BookingOutcome {
                    status: BookingStatus::ValidationError(reason),
                    draft,
                };
            }
        };

        tracing::info!(
            guest = %payload.guest_name,
            date = %payload.date,
            party_size = payload.party_size,
            "Submitting reservation"
        );

        let outcome = match self
            .api
            .create_reservation(&payload)
            .await
            .log_error_context("submitting reservation")
        {
            Ok(reply) => BookingOutcome {
                status: BookingStatus::Success(
                    reply
                        .message
                        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                ),
                draft: DraftReservation::default(),
            },
            Err(err) => BookingOutcome {
                status: BookingStatus::SubmissionError(SubmissionFailure::from(&err)),
                draft,
            },
        };

        self.refresh_list().await;
        outcome
    }
}
