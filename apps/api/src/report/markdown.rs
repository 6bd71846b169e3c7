//! Markdown report export.
//!
//! `render_markdown` is a pure function of (result, context, timestamp): the
//! same inputs always produce byte-identical text. Every string from the result
//! and the context is inserted verbatim; only headings, bullets, numbering and
//! separators are added.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::evaluation::models::{EvaluationRequest, EvaluationResult, StarComponent};
use crate::report::view::score_label;

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Renders the full report. `context` supplies the header fields and the
/// trailing copy of the original answer.
pub fn render_markdown(
    result: &EvaluationResult,
    context: &EvaluationRequest,
    generated_at: DateTime<Utc>,
) -> String {
    let sections = [
        header(context, generated_at),
        scored_assessment(result),
        star_analysis(result),
        rewrite_and_guiding(result),
        culture_alignment(result, &context.target_company),
        format!(
            "## Follow-up Questions to Expect\n\n{}",
            bullets(&result.follow_up_questions)
        ),
        format!(
            "## Alternative Framing Suggestions\n\n{}",
            bullets(&result.alternative_framing)
        ),
        length_timing(result),
        interview_ready(result),
        format!("## Your Original Answer\n\n{}", context.answer),
    ];

    let mut doc = sections.join(SECTION_SEPARATOR);
    doc.push('\n');
    doc
}

/// Download name for a report generated at `generated_at`,
/// e.g. `star_evaluation_2024-05-01T09-30-00.md`.
pub fn export_file_name(generated_at: DateTime<Utc>) -> String {
    format!(
        "star_evaluation_{}.md",
        generated_at.format("%Y-%m-%dT%H-%M-%S")
    )
}

fn header(context: &EvaluationRequest, generated_at: DateTime<Utc>) -> String {
    format!(
        "# STAR Interview Evaluation Report\n\n\
         **Generated:** {}\n\
         **Target Role:** {}\n\
         **Target Company:** {}\n\
         **Experience Level:** {}\n\
         **Question:** {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        context.target_role,
        context.target_company,
        context.experience_level,
        context.question,
    )
}

fn scored_assessment(result: &EvaluationResult) -> String {
    let dimensions = result
        .scored_assessment
        .dimensions
        .iter()
        .map(|d| {
            let score = match &d.score {
                Some(score) => format!("{score}/5"),
                None => score_label(None),
            };
            format!(
                "### {}\n**Score:** {score}\n**Justification:** {}",
                d.dimension, d.justification
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("## Scored Assessment with Justification\n\n{dimensions}")
}

fn star_analysis(result: &EvaluationResult) -> String {
    let components = result
        .star_analysis
        .components()
        .into_iter()
        .map(|(label, component)| star_component(label, component))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("## STAR-by-STAR Analysis\n\n{components}")
}

fn star_component(label: &str, component: &StarComponent) -> String {
    format!(
        "### {label}\n**Strengths:**\n{}\n\n**Opportunities:**\n{}",
        bullets(&component.strengths),
        bullets(&component.opportunities)
    )
}

fn rewrite_and_guiding(result: &EvaluationResult) -> String {
    format!(
        "## Rewrite Suggestions & Guiding Questions\n\n\
         ### Rewrite Suggestions\n{}\n\n\
         ### Guiding Questions\n{}",
        bullets(&result.rewrite_suggestions),
        bullets(&result.guiding_questions)
    )
}

fn culture_alignment(result: &EvaluationResult, company: &str) -> String {
    let alignment = &result.company_culture_alignment;
    let principles = alignment
        .principles
        .iter()
        .map(|p| format!("**{}:** {}", p.principle, p.alignment))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "## Company Culture Alignment ({company})\n\n{principles}\n\n{}",
        alignment.additional_alignment
    )
}

fn length_timing(result: &EvaluationResult) -> String {
    let timing = &result.length_timing_feedback;
    format!(
        "## Length & Timing Feedback\n\n\
         **Current Length:** {}\n\n\
         **Recommendations:**\n{}",
        timing.current_length,
        bullets(&timing.recommendations)
    )
}

fn interview_ready(result: &EvaluationResult) -> String {
    let ready = &result.interview_ready_assessment;
    format!(
        "## Interview-Ready Assessment & Top 3 Priorities\n\n\
         **Overall Assessment:**\n{}\n\n\
         **Top 3 Priorities to Maximize Impact:**\n{}\n\n\
         **Conclusion:**\n{}",
        ready.overall,
        numbered(&ready.top_priorities),
        ready.conclusion
    )
}

/// `- item` per line, source order.
fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1. item` per line, 1-based, source order.
fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
