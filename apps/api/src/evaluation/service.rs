//! Evaluation pipeline.
//!
//! Flow: validate_request → company lookup → compile_evaluation_prompt →
//!       generator.complete (single call) → parse_evaluation.
//!
//! Success is all-or-nothing: any failure returns an error and no result.

use std::future::Future;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::companies::CompanyDirectory;
use crate::evaluation::compiler::{compile_evaluation_prompt, EVALUATION_OPTIONS};
use crate::evaluation::models::{EvaluationRequest, EvaluationResult};
use crate::evaluation::response::{parse_evaluation, ParseError};
use crate::evaluation::validation::{validate_request, ValidationError};
use crate::llm_client::{Generator, LlmError};

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("unusable evaluation: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation cancelled")]
    Cancelled,
}

/// Evaluates one submission. Validation failures return before the generator is
/// touched. Gives up with `Cancelled` as soon as `abort` completes while the
/// generator call is in flight; pass `std::future::pending()` to never abort.
pub async fn evaluate_until<A>(
    request: &EvaluationRequest,
    companies: &CompanyDirectory,
    generator: &dyn Generator,
    abort: A,
) -> Result<EvaluationResult, EvaluationError>
where
    A: Future<Output = ()>,
{
    validate_request(request)?;

    let evaluation_id = Uuid::new_v4();
    let profile = companies.get(&request.target_company);
    if profile.is_none() {
        info!(
            %evaluation_id,
            "No principle profile for '{}', evaluating without principles",
            request.target_company
        );
    }

    let prompt = compile_evaluation_prompt(request, profile);
    info!(
        %evaluation_id,
        "Evaluating answer: role='{}', company='{}', answer_chars={}",
        request.target_role,
        request.target_company,
        request.answer.chars().count()
    );

    let raw = tokio::select! {
        biased;
        _ = abort => {
            warn!(%evaluation_id, "Evaluation cancelled before the generator replied");
            return Err(EvaluationError::Cancelled);
        }
        reply = generator.complete(&prompt, &EVALUATION_OPTIONS) => reply?,
    };

    let result = parse_evaluation(&raw)?;
    info!(
        %evaluation_id,
        "Evaluation complete: {} scored dimensions",
        result.scored_assessment.dimensions.len()
    );

    Ok(result)
}
