//! YAML Survey Provider - Loads a survey definition from a file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::survey::SurveyDefinition;
use crate::ports::{SurveyProvider, SurveyProviderError};

/// Loads and validates a YAML survey definition file.
#[derive(Debug, Clone)]
pub struct YamlSurveyProvider {
    path: PathBuf,
}

impl YamlSurveyProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SurveyProvider for YamlSurveyProvider {
    fn load(&self) -> Result<SurveyDefinition, SurveyProviderError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SurveyProviderError::Io(format!("{}: {}", self.path.display(), e)))?;

        let definition: SurveyDefinition = serde_yaml::from_str(&contents)
            .map_err(|e| SurveyProviderError::Parse(e.to_string()))?;

        definition.validate()?;
        Ok(definition)
    }
}
