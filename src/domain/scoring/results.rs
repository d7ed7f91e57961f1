//! Derived scoring result records.
//!
//! These are computed, never persisted, and fully populated at
//! construction: question text and value names are resolved up front so
//! no record is ever half-initialized.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, QuestionId, ValueId};

/// Agree-rate score for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question_id: QuestionId,
    pub question_text: String,
    pub value_id: ValueId,
    /// Percentage of responses scoring 4 or 5.
    pub score: Percentage,
    /// Number of responses recorded for this question.
    pub total_responses: u32,
}

/// Aggregated score for one thematic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueScore {
    pub value_id: ValueId,
    pub value_name: String,
    /// Mean of the question scores under this value.
    pub score: Percentage,
    pub question_scores: Vec<QuestionScore>,
}

/// The full survey dashboard model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResults {
    /// Largest respondent pool observed for any single question, used as
    /// a proxy for how many people took the survey.
    pub total_responses: u32,
    pub expected_responses: Option<u32>,
    /// Participation as a percentage of the invited count. Omitted when no
    /// positive invited count is known; may exceed 100 when more responses
    /// arrive than were expected.
    pub response_rate: Option<u32>,
    /// Value scores in survey definition order.
    pub value_scores: Vec<ValueScore>,
    /// Mean of the value scores.
    pub overall_score: Percentage,
}

impl SurveyResults {
    /// Returns value scores sorted best-first, for highlight listings.
    pub fn ranked_values(&self) -> Vec<&ValueScore> {
        let mut ranked: Vec<&ValueScore> = self.value_scores.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}
