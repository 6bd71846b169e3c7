//! Prompt compiler: turns a submission and its company profile into the
//! system/user instruction pair sent to the generator.
//!
//! Pure and deterministic: the same request and profile always produce
//! byte-identical text. Only contextual fields vary; the schema and rubric are
//! constants.

use crate::companies::CompanyProfile;
use crate::evaluation::models::EvaluationRequest;
use crate::evaluation::prompts::{
    EVALUATION_PROMPT_TEMPLATE, EVALUATION_SCHEMA, EVALUATION_SYSTEM, SCORING_RUBRIC,
};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{CompiledPrompt, GenerationOptions};

/// Sampling for evaluations: moderate temperature, generous budget, strict JSON.
pub const EVALUATION_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    max_tokens: 4000,
    json_output: true,
};

/// Builds the evaluation prompt. A missing profile yields an empty principle list.
pub fn compile_evaluation_prompt(
    request: &EvaluationRequest,
    profile: Option<&CompanyProfile>,
) -> CompiledPrompt {
    let principles = profile
        .map(|p| numbered_list(&p.principles))
        .unwrap_or_default();

    let schema = fill_template(EVALUATION_SCHEMA, &[("company", request.target_company.as_str())]);

    let user = fill_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("role", request.target_role.as_str()),
            ("company", request.target_company.as_str()),
            ("experience_level", request.experience_level.as_str()),
            ("question", request.question.as_str()),
            ("principles", principles.as_str()),
            ("answer", request.answer.as_str()),
            ("schema", schema.as_str()),
            ("rubric", SCORING_RUBRIC),
        ],
    );

    CompiledPrompt {
        system: format!("{EVALUATION_SYSTEM} {JSON_ONLY_SYSTEM}"),
        user,
    }
}

/// `1. first\n2. second`, 1-based, source order.
fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
