//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration only concerns the shell
//! (where to store data, which survey file to load, log verbosity); the
//! survey core itself never reads the environment.

mod error;
mod storage;
mod survey;

pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;
pub use survey::SurveySourceConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration (data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Survey definition source
    #[serde(default)]
    pub survey: SurveySourceConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            survey: SurveySourceConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PULSE_SURVEY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PULSE_SURVEY__STORAGE__DATA_DIR=./data` -> `storage.data_dir = ./data`
    /// - `PULSE_SURVEY__SURVEY__DEFINITION_PATH=survey.yaml` -> `survey.definition_path = survey.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PULSE_SURVEY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.survey.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn default_config_uses_builtin_demo_survey() {
        let config = AppConfig::default();
        assert!(config.survey.definition_path.is_none());
    }
}
