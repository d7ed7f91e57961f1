//! Survey source configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Survey definition source configuration
///
/// When no definition path is set, the built-in demo survey is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveySourceConfig {
    /// Path to a YAML survey definition file
    #[serde(default)]
    pub definition_path: Option<String>,

    /// Shuffle the question order once per session
    #[serde(default)]
    pub randomize_questions: bool,
}

impl SurveySourceConfig {
    /// Validate survey source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.definition_path {
            if path.trim().is_empty() {
                return Err(ValidationError::EmptyDefinitionPath);
            }
        }
        Ok(())
    }
}
