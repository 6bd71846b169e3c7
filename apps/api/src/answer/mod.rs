//! Sample STAR answer generation.
//!
//! Produces a model-written example answer for a question so candidates can
//! see what a strong response looks like. Free-text output; no schema.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::answer::prompts::{
    ANSWER_PROMPT_TEMPLATE, ANSWER_SYSTEM, CANDIDATE_CONTEXT_SECTION, NO_CONTEXT_SECTION,
};
use crate::companies::{CompanyDirectory, CompanyProfile};
use crate::evaluation::validation::{require_fields, ValidationError, MIN_QUESTION_CHARS};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{CompiledPrompt, GenerationOptions, Generator, LlmError};

/// Warmer sampling than evaluation; plain text.
pub const ANSWER_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.8,
    max_tokens: 1500,
    json_output: false,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub target_company: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub question: String,
    /// Optional background about the candidate's own experience.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),
}

pub fn validate_answer_request(request: &AnswerRequest) -> Result<(), ValidationError> {
    require_fields(&[
        ("targetRole", request.target_role.as_str()),
        ("targetCompany", request.target_company.as_str()),
        ("experienceLevel", request.experience_level.as_str()),
        ("question", request.question.as_str()),
    ])?;

    let chars = request.question.chars().count();
    if chars < MIN_QUESTION_CHARS {
        return Err(ValidationError::QuestionTooShort { chars });
    }
    Ok(())
}

pub fn compile_answer_prompt(
    request: &AnswerRequest,
    profile: Option<&CompanyProfile>,
) -> CompiledPrompt {
    let principles = profile
        .map(|p| {
            p.principles
                .iter()
                .map(|principle| format!("- {principle}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    let context_section = match request.context.as_deref().map(str::trim) {
        Some(context) if !context.is_empty() => {
            fill_template(CANDIDATE_CONTEXT_SECTION, &[("context", context)])
        }
        _ => NO_CONTEXT_SECTION.to_string(),
    };

    let user = fill_template(
        ANSWER_PROMPT_TEMPLATE,
        &[
            ("role", request.target_role.as_str()),
            ("company", request.target_company.as_str()),
            ("experience_level", request.experience_level.as_str()),
            ("question", request.question.as_str()),
            ("context_section", context_section.as_str()),
            ("principles", principles.as_str()),
        ],
    );

    CompiledPrompt {
        system: ANSWER_SYSTEM.to_string(),
        user,
    }
}

/// Validates, compiles and runs one generator call. The reply is trimmed.
pub async fn generate_answer(
    request: &AnswerRequest,
    companies: &CompanyDirectory,
    generator: &dyn Generator,
) -> Result<AnswerResponse, AnswerError> {
    validate_answer_request(request)?;

    let prompt = compile_answer_prompt(request, companies.get(&request.target_company));
    info!(
        "Generating sample answer: role='{}', company='{}'",
        request.target_role, request.target_company
    );

    let text = generator.complete(&prompt, &ANSWER_OPTIONS).await?;
    let answer = text.trim();
    if answer.is_empty() {
        return Err(AnswerError::Generation(LlmError::EmptyContent));
    }

    Ok(AnswerResponse {
        answer: answer.to_string(),
    })
}
