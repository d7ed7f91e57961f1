//! Application layer - Orchestration of flow, corpus, and persistence.

mod survey_app;

pub use survey_app::{AppError, SurveyApp};
