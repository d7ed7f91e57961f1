//! Results Exporter Port - One-way serialization of the dashboard model.

use thiserror::Error;

use crate::domain::scoring::SurveyResults;

/// Errors that can occur during results export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize results: {0}")]
    Serialization(String),
}

/// Port rendering computed survey results as a downloadable text blob.
///
/// This is a one-way serialization; no re-import format is defined.
pub trait ResultsExporter: Send + Sync {
    /// Render the full results as a delimited text blob.
    ///
    /// # Errors
    /// Returns `ExportError` if rendering fails.
    fn export(&self, results: &SurveyResults) -> Result<String, ExportError>;
}
