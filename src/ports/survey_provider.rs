//! Survey Provider Port - Source of the static survey definition.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::survey::{Response, SurveyDefinition};

/// Errors that can occur while loading a survey definition
#[derive(Debug, Error)]
pub enum SurveyProviderError {
    #[error("Failed to read survey definition: {0}")]
    Io(String),

    #[error("Failed to parse survey definition: {0}")]
    Parse(String),

    #[error("Invalid survey definition: {0}")]
    Invalid(#[from] ValidationError),
}

/// Port supplying the immutable survey configuration at startup.
///
/// The definition is loaded once and never mutated; the seed corpus is the
/// baseline response set that exists before any local submission.
pub trait SurveyProvider: Send + Sync {
    /// Load and validate the survey definition.
    ///
    /// # Errors
    /// Returns `SurveyProviderError` if the definition cannot be read,
    /// parsed, or fails referential validation.
    fn load(&self) -> Result<SurveyDefinition, SurveyProviderError>;

    /// The baseline seed responses shipped with the survey.
    ///
    /// Defaults to an empty corpus for sources without seed data.
    fn seed_responses(&self) -> Vec<Response> {
        Vec::new()
    }
}
