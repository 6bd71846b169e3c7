//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationRequest, EvaluationResult};
use crate::evaluation::service::evaluate_until;
use crate::state::AppState;

/// POST /api/evaluate
///
/// Validates the submission, runs one generator call and returns the parsed
/// evaluation unchanged. Validation errors are 400s raised before any model call.
/// A call still in flight when the server starts shutting down is abandoned
/// with 499.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    let result = evaluate_until(
        &request,
        &state.companies,
        state.generator.as_ref(),
        state.shutdown_requested(),
    )
    .await?;
    Ok(Json(result))
}
