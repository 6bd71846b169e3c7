use thiserror::Error;

use crate::evaluation::models::EvaluationRequest;

/// Minimum answer length, in characters.
pub const MIN_ANSWER_CHARS: usize = 50;
/// Maximum answer length, in characters.
pub const MAX_ANSWER_CHARS: usize = 10_000;
/// Minimum question length for sample answer generation.
pub const MIN_QUESTION_CHARS: usize = 10;

/// Input rejected before any generator call is made.
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Answer must be at least 50 characters long")]
    AnswerTooShort { chars: usize },

    #[error("Answer must be less than 10,000 characters")]
    AnswerTooLong { chars: usize },

    #[error("Question must be at least 10 characters long")]
    QuestionTooShort { chars: usize },
}

/// Checks that every named field is non-blank, in order. Reports the first miss.
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(ValidationError::MissingField(*name)),
        None => Ok(()),
    }
}

/// Validates an evaluation submission.
///
/// Field presence is checked first, then answer length. Length counts Unicode
/// scalar values of the answer exactly as submitted (no trimming).
pub fn validate_request(request: &EvaluationRequest) -> Result<(), ValidationError> {
    require_fields(&[
        ("targetRole", request.target_role.as_str()),
        ("targetCompany", request.target_company.as_str()),
        ("experienceLevel", request.experience_level.as_str()),
        ("question", request.question.as_str()),
        ("answer", request.answer.as_str()),
    ])?;

    let chars = request.answer.chars().count();
    if chars < MIN_ANSWER_CHARS {
        return Err(ValidationError::AnswerTooShort { chars });
    }
    if chars > MAX_ANSWER_CHARS {
        return Err(ValidationError::AnswerTooLong { chars });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_answer(answer: String) -> EvaluationRequest {
        EvaluationRequest {
            target_role: "Software Engineer".to_string(),
            target_company: "Google".to_string(),
            experience_level: "Mid-level (3-5 years)".to_string(),
            question: "Tell me about a time you debugged a production issue.".to_string(),
            answer,
        }
    }

    #[test]
    fn test_answer_at_lower_bound_passes() {
        assert!(validate_request(&request_with_answer("a".repeat(50))).is_ok());
    }

    #[test]
    fn test_answer_at_upper_bound_passes() {
        assert!(validate_request(&request_with_answer("a".repeat(10_000))).is_ok());
    }

    #[test]
    fn test_answer_49_chars_too_short() {
        let err = validate_request(&request_with_answer("a".repeat(49))).unwrap_err();
        assert_eq!(err, ValidationError::AnswerTooShort { chars: 49 });
        assert_eq!(err.to_string(), "Answer must be at least 50 characters long");
    }

    #[test]
    fn test_answer_10001_chars_too_long() {
        let err = validate_request(&request_with_answer("a".repeat(10_001))).unwrap_err();
        assert_eq!(err, ValidationError::AnswerTooLong { chars: 10_001 });
        assert_eq!(err.to_string(), "Answer must be less than 10,000 characters");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 50 two-byte characters = 100 bytes
        assert!(validate_request(&request_with_answer("é".repeat(50))).is_ok());
        assert!(validate_request(&request_with_answer("é".repeat(49))).is_err());
    }

    #[test]
    fn test_each_missing_field_named() {
        let base = request_with_answer("a".repeat(60));

        let mut r = base.clone();
        r.target_role.clear();
        assert_eq!(
            validate_request(&r).unwrap_err().to_string(),
            "Missing required field: targetRole"
        );

        let mut r = base.clone();
        r.target_company = "   ".to_string();
        assert_eq!(
            validate_request(&r).unwrap_err(),
            ValidationError::MissingField("targetCompany")
        );

        let mut r = base.clone();
        r.experience_level.clear();
        assert_eq!(
            validate_request(&r).unwrap_err(),
            ValidationError::MissingField("experienceLevel")
        );

        let mut r = base.clone();
        r.question.clear();
        assert_eq!(
            validate_request(&r).unwrap_err(),
            ValidationError::MissingField("question")
        );

        let mut r = base;
        r.answer.clear();
        assert_eq!(
            validate_request(&r).unwrap_err(),
            ValidationError::MissingField("answer")
        );
    }

    #[test]
    fn test_missing_field_reported_before_length() {
        let mut r = request_with_answer("short".to_string());
        r.question.clear();
        assert_eq!(
            validate_request(&r).unwrap_err(),
            ValidationError::MissingField("question")
        );
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            ValidationError::MissingField("answer").to_string(),
            ValidationError::AnswerTooShort { chars: 1 }.to_string(),
            ValidationError::AnswerTooLong { chars: 20_000 }.to_string(),
            ValidationError::QuestionTooShort { chars: 3 }.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
