//! Request and result types for STAR evaluation.
//!
//! `EvaluationResult` is the contract with the generator. Its JSON shape is
//! camelCase and must match the schema embedded in the evaluation prompt.
//! Nested fields tolerate absence and `null` (they default to empty); the
//! nine top-level sections are enforced by `response::parse_evaluation`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// One submission from the UI. Missing fields deserialize as empty strings so
/// validation can report them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub target_company: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub scored_assessment: ScoredAssessment,
    pub star_analysis: StarAnalysis,
    pub rewrite_suggestions: Vec<String>,
    pub guiding_questions: Vec<String>,
    pub company_culture_alignment: CultureAlignment,
    pub follow_up_questions: Vec<String>,
    pub alternative_framing: Vec<String>,
    pub length_timing_feedback: LengthTimingFeedback,
    pub interview_ready_assessment: InterviewReadyAssessment,
}

// ────────────────────────────────────────────────────────────────────────────
// Scored assessment
// ────────────────────────────────────────────────────────────────────────────

/// Serialized as `{"dimensions": [...]}`. A bare array is accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScoredAssessmentRepr")]
pub struct ScoredAssessment {
    pub dimensions: Vec<ScoredDimension>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScoredAssessmentRepr {
    Wrapped {
        #[serde(default, deserialize_with = "null_as_default")]
        dimensions: Vec<ScoredDimension>,
    },
    Bare(Vec<ScoredDimension>),
}

impl From<ScoredAssessmentRepr> for ScoredAssessment {
    fn from(repr: ScoredAssessmentRepr) -> Self {
        match repr {
            ScoredAssessmentRepr::Wrapped { dimensions } | ScoredAssessmentRepr::Bare(dimensions) => {
                Self { dimensions }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredDimension {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub justification: String,
}

/// A rubric score exactly as the generator emitted it.
///
/// Never clamped or rounded: an out-of-range, fractional or quoted value is
/// rendered as-is and only flagged via `in_rubric`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(Number),
    /// Models occasionally quote the number (`"4"`).
    Text(String),
}

impl Score {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    fn numeric_value(&self) -> Option<f64> {
        match self {
            Score::Number(n) => n.as_f64(),
            Score::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for whole numbers 1 through 5, whether emitted as `4`, `4.0` or `"4"`.
    pub fn in_rubric(&self) -> bool {
        self.numeric_value().is_some_and(|v| {
            v.fract() == 0.0 && (Self::MIN as f64..=Self::MAX as f64).contains(&v)
        })
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Number(Number::from(value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{n}"),
            Score::Text(s) => f.write_str(s),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// STAR analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub situation: StarComponent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: StarComponent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: StarComponent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: StarComponent,
}

impl StarAnalysis {
    /// Components in situation → task → action → result order, with display labels.
    pub fn components(&self) -> [(&'static str, &StarComponent); 4] {
        [
            ("Situation", &self.situation),
            ("Task", &self.task),
            ("Action", &self.action),
            ("Result", &self.result),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarComponent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opportunities: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Remaining sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureAlignment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub principles: Vec<PrincipleAlignment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_alignment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrincipleAlignment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub principle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alignment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthTimingFeedback {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_length: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReadyAssessment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_priorities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conclusion: String,
}

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
