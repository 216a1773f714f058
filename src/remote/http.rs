//! Capa de transporte HTTP hacia el API de reservas

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{AppError, AppResult};

/// Estado y cuerpo crudo de una respuesta remota
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstracción del cliente HTTP, para probar el tablero sin red
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Envía un GET a la URL indicada
    async fn get(&self, url: &str) -> AppResult<RemoteResponse>;

    /// Envía un POST con cuerpo JSON (`Content-Type: application/json`)
    async fn post_json(&self, url: &str, body: &Value) -> AppResult<RemoteResponse>;
}

/// Cliente HTTP de producción sobre reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    async fn read(operation: &str, response: reqwest::Response) -> AppResult<RemoteResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::http(operation, e))?;

        tracing::debug!("{} -> {} ({} bytes)", operation, status, body.len());
        Ok(RemoteResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> AppResult<RemoteResponse> {
        let operation = format!("GET {}", url);
        tracing::debug!("{}", operation);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::http(&operation, e))?;

        Self::read(&operation, response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> AppResult<RemoteResponse> {
        let operation = format!("POST {}", url);
        tracing::debug!("{}", operation);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::http(&operation, e))?;

        Self::read(&operation, response).await
    }
}
