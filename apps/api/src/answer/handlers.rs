use axum::{extract::State, Json};

use crate::answer::{generate_answer, AnswerError, AnswerRequest, AnswerResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/generate-answer
pub async fn handle_generate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    generate_answer(&request, &state.companies, state.generator.as_ref())
        .await
        .map(Json)
        .map_err(|e| match e {
            AnswerError::Validation(v) => AppError::Validation(v.to_string()),
            AnswerError::Generation(g) => AppError::AnswerGeneration(g.to_string()),
        })
}
