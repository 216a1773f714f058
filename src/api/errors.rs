//! # Manejo de errores
//!
//! Una única jerarquía `thiserror` compartida por el cliente remoto, el tablero
//! y los handlers HTTP. Los errores conservan su cadena de `source()` para que
//! [`super::middleware::log_error_chain`] pueda registrarla completa.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::error::Error;
use thiserror::Error;

use crate::board::validation::ValidationError;

/// Tipos de error de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Fallo de transporte hablando con el API de reservas
    ///
    /// Conserva el `reqwest::Error` original como source (conexión rechazada,
    /// fallo de DNS, cuerpo interrumpido...).
    #[error("HTTP request '{operation}' failed: {source}")]
    Http {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// El API de reservas respondió algo que no es el JSON esperado
    #[error("Invalid JSON in response to '{operation}': {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// El API de reservas respondió con un estado distinto de 2xx
    #[error("Reservations API rejected '{operation}' with status {status}")]
    Rejected { operation: String, status: u16 },

    /// Borrador rechazado antes de enviar nada
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fallo del envío, reportado a clientes JSON con un código de rastreo
    #[error("Upstream failure (trace: {trace_id}): {message}")]
    Upstream { trace_id: String, message: String },

    /// Configuración de arranque inválida
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Métodos helper para crear errores con contexto
impl AppError {
    /// Envuelve un error de transporte con la operación que lo provocó
    pub fn http(operation: &str, source: reqwest::Error) -> Self {
        Self::Http {
            operation: operation.to_string(),
            source,
        }
    }

    /// Envuelve un error JSON con la operación que lo provocó
    pub fn decode(operation: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.to_string(),
            source,
        }
    }

    /// Crea un error upstream, generando un trace id si no se indica ninguno
    pub fn upstream(message: &str, trace_id: Option<String>) -> Self {
        Self::Upstream {
            trace_id: trace_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            message: message.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Http { .. } | Self::Decode { .. } | Self::Rejected { .. } | Self::Upstream { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Log detallado del error antes de responder
        let status = self.status_code();
        match self {
            Self::Validation(reason) => {
                tracing::warn!(reason = %reason, "Validation error");
                HttpResponse::build(status).json(ErrorResponse {
                    error: "Validation error".to_string(),
                    message: reason.to_string(),
                })
            }
            Self::Rejected {
                operation,
                status: upstream_status,
            } => {
                tracing::warn!(
                    operation = %operation,
                    upstream_status = upstream_status,
                    "Reservations API rejected request"
                );
                HttpResponse::build(status).json(ErrorResponse {
                    error: "Rejected".to_string(),
                    message: format!("Upstream status {}", upstream_status),
                })
            }
            Self::Upstream { trace_id, message } => {
                tracing::error!(
                    trace_id = %trace_id,
                    message = %message,
                    "Upstream error with trace"
                );
                HttpResponse::build(status).json(ErrorResponse {
                    error: "Upstream error".to_string(),
                    message: format!("{} (trace: {})", message, trace_id),
                })
            }
            // Fallback para el resto de errores
            error => {
                tracing::error!(
                    error = %error,
                    error_chain = ?error.source(),
                    "General error"
                );
                HttpResponse::build(status).json(ErrorResponse {
                    error: "Error".to_string(),
                    message: error.to_string(),
                })
            }
        }
    }
}

/// Cuerpo JSON de toda respuesta de error
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type AppResult<T> = Result<T, AppError>;
