#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Taxonomy: `Validation` is rejected before any network call;
/// `Transport`/`Upstream`/`Schema` cover the completion-service path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream error (status {status})")]
    Upstream { status: u16 },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a completion-client failure onto the handler-facing taxonomy.
    ///
    /// `schema_message` is the generic text surfaced when the reply did not
    /// match the expected shape; the raw detail is logged, never echoed to
    /// the client.
    pub fn from_llm(err: LlmError, schema_message: &str) -> Self {
        match err {
            LlmError::Transport(e) => {
                tracing::error!("Completion transport failure: {e}");
                AppError::Transport(e.to_string())
            }
            LlmError::Exhausted { attempts } => {
                tracing::error!("Completion request exhausted {attempts} attempts");
                AppError::Transport(format!("request failed after {attempts} attempts"))
            }
            LlmError::Upstream { status, message } => {
                tracing::error!("Completion service returned {status}: {message}");
                AppError::Upstream { status }
            }
            LlmError::Parse(e) => {
                tracing::error!("Completion reply was not the expected JSON: {e}");
                AppError::Schema(schema_message.to_string())
            }
            LlmError::EmptyContent => {
                tracing::error!("Completion reply carried no text content");
                AppError::Schema(schema_message.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Transport(e) => {
                tracing::error!("Transport error: {e}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "TRANSPORT_ERROR",
                    "An unexpected error occurred. Please try again.".to_string(),
                )
            }
            AppError::Upstream { status: 429 } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Rate limit exceeded. Please try again in a moment.".to_string(),
            ),
            AppError::Upstream { status: 401 } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH",
                "Authentication error. Please contact the site administrator.".to_string(),
            ),
            AppError::Upstream { status } => {
                tracing::error!("Upstream error: status {status}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The AI service returned an error. Please try again.".to_string(),
                )
            }
            AppError::Schema(msg) => (StatusCode::BAD_GATEWAY, "SCHEMA_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
