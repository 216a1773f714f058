use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

use super::validation::ValidationError;
use crate::api::AppError;

/// Se muestra tras una reserva correcta cuando el API no envía mensaje
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Reservation successful!";
/// Se muestra cuando el envío no obtuvo ninguna respuesta JSON
pub const SUBMISSION_ERROR_MESSAGE: &str = "Error submitting reservation.";

/// Envío que salió del tablero pero no obtuvo respuesta JSON
///
/// Fallo de red o cuerpo que no es JSON, con cualquier código de estado.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("transport failure: {detail}")]
pub struct SubmissionFailure {
    pub detail: String,
}

impl SubmissionFailure {
    pub fn user_message(&self) -> &str {
        SUBMISSION_ERROR_MESSAGE
    }
}

impl From<&AppError> for SubmissionFailure {
    fn from(error: &AppError) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

/// Resultado del último intento de reserva, mostrado como banner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Idle,
    ValidationError(ValidationError),
    SubmissionError(SubmissionFailure),
    Success(String),
}

impl BookingStatus {
    /// Texto del banner (vacío en reposo)
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Idle => Cow::Borrowed(""),
            Self::ValidationError(reason) => Cow::Owned(reason.to_string()),
            Self::SubmissionError(failure) => Cow::Borrowed(failure.user_message()),
            Self::Success(message) => Cow::Borrowed(message.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
