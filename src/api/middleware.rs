//! # Utilidades de logging para errores
//!
//! Recorren `source()` y registran cada capa de un error con tracing.

use std::error::Error as StdError;

/// Recoge el texto de un error y de todas sus causas, de fuera hacia dentro
pub fn error_chain<E>(error: &E) -> Vec<String>
where
    E: StdError + 'static,
{
    let mut chain = Vec::new();
    let mut current_error: Option<&dyn StdError> = Some(error);

    while let Some(err) = current_error {
        chain.push(err.to_string());
        current_error = err.source();
    }

    chain
}

/// Registra la cadena completa de errores con nivel ERROR
///
/// # Ejemplo
/// ```ignore
/// if let Err(e) = api.list_reservations().await {
///     log_error_chain(&e, Some("loading reservation list"));
/// }
/// ```
pub fn log_error_chain<E>(error: &E, context: Option<&str>)
where
    E: StdError + 'static,
{
    let error_chain = error_chain(error);

    if let Some(ctx) = context {
        tracing::error!(
            context = %ctx,
            error_chain = ?error_chain,
            "Error with full chain (with context)"
        );
    } else {
        tracing::error!(error_chain = ?error_chain, "Error with full chain");
    }
}

/// Extension trait para Results que registra la cadena de errores y devuelve el resultado intacto
pub trait ErrorLogExt<T, E> {
    /// Loggea la cadena de errores con contexto adicional
    fn log_error_context(self, context: &str) -> Result<T, E>;

    /// Loggea la cadena de errores con un nivel específico
    fn log_error_level(self, level: tracing::Level, context: &str) -> Result<T, E>;
}

impl<T, E> ErrorLogExt<T, E> for Result<T, E>
where
    E: StdError + 'static,
{
    fn log_error_context(self, context: &str) -> Result<T, E> {
        if let Err(ref error) = self {
            log_error_chain(error, Some(context));
        }
        self
    }

    fn log_error_level(self, level: tracing::Level, context: &str) -> Result<T, E> {
        if let Err(ref error) = self {
            match level {
                tracing::Level::ERROR => log_error_chain(error, Some(context)),
                tracing::Level::WARN => {
                    tracing::warn!(
                        context = %context,
                        error_chain = ?error_chain(error),
                        "Warning with error chain"
                    );
                }
                _ => {
                    tracing::info!(context = %context, "Error occurred: {}", error);
                }
            }
        }
        self
    }
}
