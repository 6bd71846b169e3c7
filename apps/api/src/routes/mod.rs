pub mod health;

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::answer::handlers::handle_generate_answer;
use crate::companies::CompanyProfile;
use crate::errors::AppError;
use crate::evaluation::handlers::handle_evaluate;
use crate::rate_limit::enforce_rate_limit;
use crate::report::handlers::{handle_export_report, handle_report_view};
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// GET /api/data/company-values/:company
async fn handle_company_values(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> Result<Json<CompanyProfile>, AppError> {
    state
        .companies
        .get(&company)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/data/company-values/:company",
            get(handle_company_values),
        )
        .route("/api/evaluate", post(handle_evaluate))
        .route("/api/generate-answer", post(handle_generate_answer))
        .route("/api/report", post(handle_export_report))
        .route("/api/report/view", post(handle_report_view))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_rate_limit,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
