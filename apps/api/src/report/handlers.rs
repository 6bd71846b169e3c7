//! Axum route handlers for the Report API.
//!
//! Both endpoints take the evaluation exactly as `/api/evaluate` returned it,
//! plus the submission it was produced for. The evaluation is re-checked
//! against the result schema before rendering.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationRequest, EvaluationResult};
use crate::evaluation::response::parse_evaluation_value;
use crate::report::markdown::{export_file_name, render_markdown};
use crate::report::view::{build_view, ReportView};

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub context: EvaluationRequest,
    pub evaluation: Value,
}

fn parse_report(evaluation: Value) -> Result<EvaluationResult, AppError> {
    parse_evaluation_value(evaluation)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid evaluation: {e}")))
}

/// POST /api/report
///
/// Returns the Markdown report as a file attachment.
pub async fn handle_export_report(
    Json(request): Json<ReportRequest>,
) -> Result<Response, AppError> {
    let result = parse_report(request.evaluation)?;
    let generated_at = Utc::now();

    let document = render_markdown(&result, &request.context, generated_at);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(generated_at)
    );

    tracing::info!(
        "Exported report for company '{}' ({} bytes)",
        request.context.target_company,
        document.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}

/// POST /api/report/view
pub async fn handle_report_view(
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportView>, AppError> {
    let result = parse_report(request.evaluation)?;
    Ok(Json(build_view(&result, &request.context.target_company)))
}
