//! Response validator: turns the generator's raw text into an `EvaluationResult`.
//!
//! Policy:
//! - all nine top-level sections are required; absent or `null` is a
//!   `MissingSection` error and no partial result is ever built
//! - nested fields that are absent or `null` default to empty
//! - scores are kept exactly as emitted (out-of-range values are logged)

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::evaluation::models::EvaluationResult;
use crate::llm_client::strip_json_fences;

/// Top-level keys every evaluation must carry, in render order.
pub const REQUIRED_SECTIONS: [&str; 9] = [
    "scoredAssessment",
    "starAnalysis",
    "rewriteSuggestions",
    "guidingQuestions",
    "companyCultureAlignment",
    "followUpQuestions",
    "alternativeFraming",
    "lengthTimingFeedback",
    "interviewReadyAssessment",
];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("generator returned no content")]
    Empty,

    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("response JSON is not an object")]
    NotAnObject,

    #[error("response is missing required section '{0}'")]
    MissingSection(&'static str),

    #[error("response does not match the evaluation schema: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Parses raw generator text. Markdown code fences around the JSON are tolerated.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationResult, ParseError> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let value: Value = serde_json::from_str(text).map_err(ParseError::Malformed)?;
    parse_evaluation_value(value)
}

/// Applies the section policy to an already-decoded JSON value.
pub fn parse_evaluation_value(value: Value) -> Result<EvaluationResult, ParseError> {
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    if let Some(missing) = REQUIRED_SECTIONS
        .iter()
        .find(|key| object.get(**key).map_or(true, Value::is_null))
    {
        return Err(ParseError::MissingSection(*missing));
    }

    let result: EvaluationResult = serde_json::from_value(value).map_err(ParseError::Shape)?;

    for dim in &result.scored_assessment.dimensions {
        match &dim.score {
            Some(score) if !score.in_rubric() => {
                warn!(
                    "Dimension '{}' scored {} (not a whole number in 1-5), rendering as-is",
                    dim.dimension, score
                );
            }
            None => warn!("Dimension '{}' has no score", dim.dimension),
            _ => {}
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_response() -> Value {
        json!({
            "scoredAssessment": {
                "dimensions": [
                    {"dimension": "Situation Clarity", "score": 4, "justification": "Context is clear."}
                ]
            },
            "starAnalysis": {
                "situation": {"strengths": ["Specific"], "opportunities": ["Shorter"]},
                "task": {"strengths": [], "opportunities": []},
                "action": {"strengths": ["Owned it"], "opportunities": []},
                "result": {"strengths": [], "opportunities": ["Quantify"]}
            },
            "rewriteSuggestions": ["Lead with the outcome"],
            "guidingQuestions": ["What was the metric?"],
            "companyCultureAlignment": {
                "principles": [{"principle": "Ownership", "alignment": "Took the pager"}],
                "additionalAlignment": "Mention customers"
            },
            "followUpQuestions": ["What would you change?"],
            "alternativeFraming": ["Frame as a scaling story"],
            "lengthTimingFeedback": {"currentLength": "About 1 minute", "recommendations": ["Add detail"]},
            "interviewReadyAssessment": {
                "overall": "Nearly ready",
                "topPriorities": ["A", "B", "C"],
                "conclusion": "Good work"
            }
        })
    }

    #[test]
    fn test_parses_full_response() {
        let result = parse_evaluation(&full_response().to_string()).unwrap();
        assert_eq!(result.scored_assessment.dimensions.len(), 1);
        assert_eq!(result.star_analysis.situation.strengths, vec!["Specific"]);
        assert_eq!(result.interview_ready_assessment.top_priorities, vec!["A", "B", "C"]);
        assert_eq!(result.company_culture_alignment.principles[0].principle, "Ownership");
    }

    #[test]
    fn test_parses_fenced_response() {
        let raw = format!("```json\n{}\n```", full_response());
        assert!(parse_evaluation(&raw).is_ok());
    }

    #[test]
    fn test_malformed_text_rejected() {
        let err = parse_evaluation("Sure! Here is your evaluation: {oops").unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(parse_evaluation("   \n").unwrap_err(), ParseError::Empty));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            parse_evaluation("[1, 2, 3]").unwrap_err(),
            ParseError::NotAnObject
        ));
    }

    #[test]
    fn test_each_missing_section_rejected() {
        for section in REQUIRED_SECTIONS {
            let mut value = full_response();
            value.as_object_mut().unwrap().remove(section);
            match parse_evaluation_value(value) {
                Err(ParseError::MissingSection(name)) => assert_eq!(name, section),
                other => panic!("expected MissingSection({section}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_null_section_counts_as_missing() {
        let mut value = full_response();
        value["guidingQuestions"] = Value::Null;
        assert!(matches!(
            parse_evaluation_value(value).unwrap_err(),
            ParseError::MissingSection("guidingQuestions")
        ));
    }

    #[test]
    fn test_missing_nested_fields_default_empty() {
        let mut value = full_response();
        value["starAnalysis"] = json!({"situation": {"strengths": ["Only this"]}});
        value["lengthTimingFeedback"] = json!({});
        value["interviewReadyAssessment"] = json!({"overall": "ok", "topPriorities": null});

        let result = parse_evaluation_value(value).unwrap();
        assert!(result.star_analysis.situation.opportunities.is_empty());
        assert!(result.star_analysis.result.strengths.is_empty());
        assert!(result.length_timing_feedback.current_length.is_empty());
        assert!(result.interview_ready_assessment.top_priorities.is_empty());
        assert!(result.interview_ready_assessment.conclusion.is_empty());
    }

    #[test]
    fn test_out_of_range_score_preserved() {
        let mut value = full_response();
        value["scoredAssessment"]["dimensions"][0]["score"] = json!(9);
        let result = parse_evaluation_value(value).unwrap();
        let score = result.scored_assessment.dimensions[0].score.as_ref().unwrap();
        assert_eq!(score.to_string(), "9");
    }

    #[test]
    fn test_quoted_and_float_scores_accepted() {
        let mut value = full_response();
        value["scoredAssessment"]["dimensions"] = json!([
            {"dimension": "Situation Clarity", "score": "4", "justification": "Quoted"},
            {"dimension": "Task Definition", "score": 4.0, "justification": "Float"}
        ]);
        let result = parse_evaluation_value(value).unwrap();

        let dims = &result.scored_assessment.dimensions;
        let quoted = dims[0].score.as_ref().unwrap();
        let float = dims[1].score.as_ref().unwrap();
        assert_eq!((quoted.to_string().as_str(), quoted.in_rubric()), ("4", true));
        assert_eq!((float.to_string().as_str(), float.in_rubric()), ("4.0", true));
    }

    #[test]
    fn test_wrong_type_rejected_as_shape_error() {
        let mut value = full_response();
        value["rewriteSuggestions"] = json!("not a list");
        assert!(matches!(
            parse_evaluation_value(value).unwrap_err(),
            ParseError::Shape(_)
        ));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut value = full_response();
        value["modelNotes"] = json!("ignore me");
        assert!(parse_evaluation_value(value).is_ok());
    }
}
