//! UI view model: the nine result sections in fixed display order.
//!
//! Strings are moved across untouched. The only things added are titles,
//! section keys, 1-based numbering for priorities, and score labels.

use serde::Serialize;

use crate::evaluation::models::{EvaluationResult, PrincipleAlignment, Score};
use crate::evaluation::response::REQUIRED_SECTIONS;

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    /// The `EvaluationResult` JSON key this section was built from.
    pub key: &'static str,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    ScoreTable {
        rows: Vec<ScoreRow>,
    },
    Star {
        components: Vec<StarComponentView>,
    },
    List {
        items: Vec<String>,
    },
    Culture {
        principles: Vec<PrincipleAlignment>,
        additional_alignment: String,
    },
    Timing {
        current_length: String,
        recommendations: Vec<String>,
    },
    Readiness {
        overall: String,
        top_priorities: Vec<NumberedItem>,
        conclusion: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub dimension: String,
    pub score: Option<Score>,
    /// `score` as displayed: the emitted number verbatim, or `N/A`.
    pub score_label: String,
    /// False when the score is missing or not an integer in 1-5.
    pub in_rubric: bool,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StarComponentView {
    pub label: &'static str,
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberedItem {
    pub number: usize,
    pub text: String,
}

/// Display text for an optional score.
pub fn score_label(score: Option<&Score>) -> String {
    score.map_or_else(|| "N/A".to_string(), Score::to_string)
}

/// Projects a result into display sections. `company` only feeds the culture title.
pub fn build_view(result: &EvaluationResult, company: &str) -> ReportView {
    let [scored, star, rewrite, guiding, culture, follow_up, framing, timing, ready] =
        REQUIRED_SECTIONS;

    let rows = result
        .scored_assessment
        .dimensions
        .iter()
        .map(|d| ScoreRow {
            dimension: d.dimension.clone(),
            score: d.score.clone(),
            score_label: score_label(d.score.as_ref()),
            in_rubric: d.score.as_ref().is_some_and(Score::in_rubric),
            justification: d.justification.clone(),
        })
        .collect();

    let components = result
        .star_analysis
        .components()
        .into_iter()
        .map(|(label, c)| StarComponentView {
            label,
            strengths: c.strengths.clone(),
            opportunities: c.opportunities.clone(),
        })
        .collect();

    let ready_assessment = &result.interview_ready_assessment;
    let top_priorities = ready_assessment
        .top_priorities
        .iter()
        .enumerate()
        .map(|(i, text)| NumberedItem {
            number: i + 1,
            text: text.clone(),
        })
        .collect();

    let list = |items: &Vec<String>| SectionBody::List {
        items: items.clone(),
    };

    let sections = vec![
        section(scored, "Scored Assessment with Justification", SectionBody::ScoreTable { rows }),
        section(star, "STAR-by-STAR Analysis", SectionBody::Star { components }),
        section(rewrite, "Rewrite Suggestions", list(&result.rewrite_suggestions)),
        section(guiding, "Guiding Questions", list(&result.guiding_questions)),
        section(
            culture,
            &format!("Company Culture Alignment ({company})"),
            SectionBody::Culture {
                principles: result.company_culture_alignment.principles.clone(),
                additional_alignment: result.company_culture_alignment.additional_alignment.clone(),
            },
        ),
        section(follow_up, "Follow-up Questions to Expect", list(&result.follow_up_questions)),
        section(framing, "Alternative Framing Suggestions", list(&result.alternative_framing)),
        section(
            timing,
            "Length & Timing Feedback",
            SectionBody::Timing {
                current_length: result.length_timing_feedback.current_length.clone(),
                recommendations: result.length_timing_feedback.recommendations.clone(),
            },
        ),
        section(
            ready,
            "Interview-Ready Assessment & Top 3 Priorities",
            SectionBody::Readiness {
                overall: ready_assessment.overall.clone(),
                top_priorities,
                conclusion: ready_assessment.conclusion.clone(),
            },
        ),
    ];

    ReportView { sections }
}

fn section(key: &'static str, title: &str, body: SectionBody) -> SectionView {
    SectionView {
        key,
        title: title.to_string(),
        body,
    }
}
