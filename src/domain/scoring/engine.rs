//! Pure scoring functions.
//!
//! Scoring is total over its input domain: missing responses, empty
//! question sets, and absent invited counts all resolve to zeros or
//! omitted fields by policy, never to an error. Re-running any function
//! on the same inputs produces identical output.

use crate::domain::foundation::Percentage;
use crate::domain::survey::{Question, Response, SurveyDefinition, Value};

use super::{QuestionScore, SurveyResults, ValueScore};

/// Scores one question as the percentage of agree-or-above responses.
pub fn score_question(question: &Question, responses: &[Response]) -> QuestionScore {
    let question_responses: Vec<&Response> = responses
        .iter()
        .filter(|r| r.question_id == question.id)
        .collect();

    let total_responses = question_responses.len() as u32;
    let agree_count = question_responses
        .iter()
        .filter(|r| r.score.is_agreement())
        .count() as u32;

    QuestionScore {
        question_id: question.id.clone(),
        question_text: question.text.clone(),
        value_id: question.value_id.clone(),
        score: Percentage::from_ratio(agree_count, total_responses),
        total_responses,
    }
}

/// Scores one value as the mean of its question scores.
///
/// A value with no associated questions scores 0.
pub fn score_value(value: &Value, questions: &[Question], responses: &[Response]) -> ValueScore {
    let question_scores: Vec<QuestionScore> = questions
        .iter()
        .filter(|q| q.value_id == value.id)
        .map(|q| score_question(q, responses))
        .collect();

    let scores: Vec<Percentage> = question_scores.iter().map(|qs| qs.score).collect();

    ValueScore {
        value_id: value.id.clone(),
        value_name: value.name.clone(),
        score: Percentage::mean(&scores),
        question_scores,
    }
}

/// Scores the whole survey, preserving the given value order.
///
/// `total_responses` is the largest per-question response count seen
/// anywhere in the survey. The participation rate is computed only when
/// a positive invited count is supplied.
pub fn score_survey(
    values: &[Value],
    questions: &[Question],
    responses: &[Response],
    expected_responses: Option<u32>,
) -> SurveyResults {
    let value_scores: Vec<ValueScore> = values
        .iter()
        .map(|v| score_value(v, questions, responses))
        .collect();

    let total_responses = value_scores
        .iter()
        .flat_map(|vs| vs.question_scores.iter())
        .map(|qs| qs.total_responses)
        .max()
        .unwrap_or(0);

    let scores: Vec<Percentage> = value_scores.iter().map(|vs| vs.score).collect();
    let overall_score = Percentage::mean(&scores);

    let response_rate = expected_responses
        .filter(|&expected| expected > 0)
        .map(|expected| (f64::from(total_responses) / f64::from(expected) * 100.0).round() as u32);

    SurveyResults {
        total_responses,
        expected_responses,
        response_rate,
        value_scores,
        overall_score,
    }
}

/// Convenience wrapper scoring a survey definition directly.
pub fn score_definition(definition: &SurveyDefinition, responses: &[Response]) -> SurveyResults {
    score_survey(
        &definition.values,
        &definition.questions,
        responses,
        definition.expected_responses,
    )
}
