// All LLM prompt constants for the Evaluation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role statement for the evaluation system message.
/// `compiler` appends `JSON_ONLY_SYSTEM` to it.
pub const EVALUATION_SYSTEM: &str = "You are an expert interview coach specializing in \
    behavioral interviews using the STAR method (Situation, Task, Action, Result). \
    Your role is to provide comprehensive, actionable feedback that helps candidates \
    improve their interview performance.";

/// The result schema the generator must return. Kept byte-stable: only
/// `{company}` varies. Every field name here must match `models::EvaluationResult`.
pub const EVALUATION_SCHEMA: &str = r#"{
  "scoredAssessment": {
    "dimensions": [
      {
        "dimension": "Situation Clarity",
        "score": 1-5,
        "justification": "Detailed explanation"
      },
      {
        "dimension": "Task Definition",
        "score": 1-5,
        "justification": "Detailed explanation"
      },
      {
        "dimension": "Actions Taken",
        "score": 1-5,
        "justification": "Detailed explanation"
      },
      {
        "dimension": "Results & Impact",
        "score": 1-5,
        "justification": "Detailed explanation"
      },
      {
        "dimension": "{company} Leadership Principles",
        "score": 1-5,
        "justification": "Detailed explanation showing which principles are demonstrated"
      },
      {
        "dimension": "Technical Depth (Role-Relevant)",
        "score": 1-5,
        "justification": "Detailed explanation"
      },
      {
        "dimension": "Communication & Structure",
        "score": 1-5,
        "justification": "Detailed explanation"
      }
    ]
  },
  "starAnalysis": {
    "situation": {
      "strengths": ["strength 1", "strength 2"],
      "opportunities": ["opportunity 1", "opportunity 2"]
    },
    "task": {
      "strengths": ["strength 1", "strength 2"],
      "opportunities": ["opportunity 1", "opportunity 2"]
    },
    "action": {
      "strengths": ["strength 1", "strength 2"],
      "opportunities": ["opportunity 1", "opportunity 2"]
    },
    "result": {
      "strengths": ["strength 1", "strength 2"],
      "opportunities": ["opportunity 1", "opportunity 2"]
    }
  },
  "rewriteSuggestions": ["Suggestion 1", "Suggestion 2", "Suggestion 3", "Suggestion 4"],
  "guidingQuestions": ["Question 1", "Question 2", "Question 3", "Question 4"],
  "companyCultureAlignment": {
    "principles": [
      {
        "principle": "Principle Name",
        "alignment": "How it aligns with the story"
      }
    ],
    "additionalAlignment": "Additional suggestions for better alignment"
  },
  "followUpQuestions": ["Question 1", "Question 2", "Question 3", "Question 4", "Question 5"],
  "alternativeFraming": ["Suggestion 1", "Suggestion 2", "Suggestion 3"],
  "lengthTimingFeedback": {
    "currentLength": "Estimated speaking time",
    "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
  },
  "interviewReadyAssessment": {
    "overall": "Overall assessment text",
    "topPriorities": ["Priority 1", "Priority 2", "Priority 3"],
    "conclusion": "Concluding statement"
  }
}"#;

/// Scoring rubric. Labels are part of the contract with the generator.
pub const SCORING_RUBRIC: &str = "\
- 5: Exceptional - Exceeds expectations, highly impressive
- 4: Strong - Meets expectations well, minor improvements possible
- 3: Adequate - Meets basic expectations, needs improvement
- 2: Weak - Below expectations, significant gaps
- 1: Poor - Major issues, needs substantial work";

/// Evaluation prompt template.
/// Replace: {role}, {company}, {experience_level}, {question}, {principles},
///          {answer}, {schema}, {rubric}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the following behavioral interview answer using the STAR method.

CONTEXT:
- Target Role: {role}
- Target Company: {company}
- Experience Level: {experience_level}
- Interview Question: {question}

COMPANY LEADERSHIP PRINCIPLES ({company}):
{principles}

CANDIDATE'S ANSWER:
{answer}

EVALUATION REQUIREMENTS:

Provide a comprehensive evaluation as a JSON object with this EXACT schema (no extra fields, every field present, lists may be empty but never omitted):

{schema}

SCORING GUIDELINES ("score" is an integer from 1 to 5):
{rubric}

FOCUS AREAS:
1. Ensure feedback is specific, actionable, and constructive
2. Highlight alignment with {company}'s leadership principles
3. Provide role-specific technical depth feedback for {role}
4. Consider the {experience_level} experience level expectations
5. Balance praise for strengths with clear improvement opportunities

Return ONLY valid JSON, no additional text or markdown formatting."#;
