use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::quiz::generator::GenerationError;

/// Used when a server-side failure carries no message of its own.
pub const INTERNAL_FALLBACK: &str = "Erro interno do servidor ao gerar questionário.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body has the shape `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl AppError {
    /// Status and user-facing message for this error.
    pub fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation(e) => {
                let message = if e.message.trim().is_empty() {
                    INTERNAL_FALLBACK.to_string()
                } else {
                    e.message.clone()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
