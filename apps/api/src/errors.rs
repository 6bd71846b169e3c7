use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::service::EvaluationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream and schema failures are logged in full but surface to the user only
/// as a generic message; no partial result is ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    #[error("Answer generation failed: {0}")]
    AnswerGeneration(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EvaluationError> for AppError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::Validation(e) => AppError::Validation(e.to_string()),
            EvaluationError::Cancelled => AppError::Cancelled,
            other @ (EvaluationError::Generation(_) | EvaluationError::Parse(_)) => {
                AppError::Evaluation(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Evaluation(detail) => {
                tracing::error!("Evaluation error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EVALUATION_FAILED",
                    "Failed to evaluate answer".to_string(),
                )
            }
            AppError::AnswerGeneration(detail) => {
                tracing::error!("Answer generation error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "Failed to generate answer".to_string(),
                )
            }
            AppError::Cancelled => (
                // 499: client closed request (nginx convention)
                StatusCode::from_u16(499).unwrap_or(StatusCode::SERVICE_UNAVAILABLE),
                "CANCELLED",
                "The request was cancelled".to_string(),
            ),
            AppError::RateLimited(limit) => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                format!("Rate limit exceeded: {limit}"),
            ),
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
