use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing or invalid credential")]
    Unauthorized,

    #[error("Plan violation: {0}")]
    PlanViolation(String),

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or invalid credential".to_string(),
            ),
            AppError::PlanViolation(reason) => {
                (StatusCode::FORBIDDEN, "PLAN_VIOLATION", reason.clone())
            }
            AppError::UnknownVoice(tone) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_VOICE",
                format!("Voice '{}' does not exist", tone),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Provider { status, body } => (
                StatusCode::BAD_GATEWAY,
                "PROVIDER_ERROR",
                format!("Upstream synthesis failed ({}): {}", status, body),
            ),
            AppError::Transport(e) => (
                StatusCode::BAD_GATEWAY,
                "PROVIDER_UNREACHABLE",
                e.to_string(),
            ),
        };

        tracing::error!("Request failed: {} - {}", code, message);

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
