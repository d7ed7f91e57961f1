//! Scoring module - Pure aggregation of responses into percentage scores.

mod engine;
mod results;

pub use engine::{score_definition, score_question, score_survey, score_value};
pub use results::{QuestionScore, SurveyResults, ValueScore};
