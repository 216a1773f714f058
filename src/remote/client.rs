//! Cliente del API de reservas externo

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::http::HttpClient;
use super::models::{CreateReservationReply, NewReservation, Reservation};
use crate::api::{AppError, AppResult};

const LIST_OPERATION: &str = "list reservations";
const CREATE_OPERATION: &str = "create reservation";

/// Acceso tipado a `GET /reservations` y `POST /reservations`
#[derive(Clone)]
pub struct ReservationsApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for ReservationsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReservationsApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ReservationsApi {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created ReservationsApi at {}", base_url);
        Self { base_url, http }
    }

    pub fn reservations_url(&self) -> String {
        format!("{}/reservations", self.base_url)
    }

    /// Obtiene la colección completa, en el orden del servidor
    pub async fn list_reservations(&self) -> AppResult<Vec<Reservation>> {
        let response = self.http.get(&self.reservations_url()).await?;

        if !response.is_success() {
            return Err(AppError::Rejected {
                operation: LIST_OPERATION.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| AppError::decode(LIST_OPERATION, e))
    }

    /// Crea una reserva
    ///
    /// Un cuerpo que no es JSON es un error de decodificación con cualquier
    /// estado. Cualquier cuerpo JSON es una respuesta válida; si el estado no
    /// es 2xx solo se registra como aviso.
    pub async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> AppResult<CreateReservationReply> {
        let payload =
            serde_json::to_value(reservation).map_err(|e| AppError::decode(CREATE_OPERATION, e))?;
        let response = self
            .http
            .post_json(&self.reservations_url(), &payload)
            .await?;

        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| AppError::decode(CREATE_OPERATION, e))?;
        let reply = CreateReservationReply::from_value(&body);

        if !response.is_success() {
            tracing::warn!(
                operation = CREATE_OPERATION,
                status = response.status,
                message = ?reply.message,
                "Reservations API answered with a non-success status"
            );
        }

        Ok(reply)
    }
}
