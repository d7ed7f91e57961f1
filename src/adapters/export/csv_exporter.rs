//! CSV Exporter - Flat tabular rendering of survey results.
//!
//! One row per question, carrying its value's name and score alongside,
//! so the export opens directly in a spreadsheet without re-joining.

use crate::domain::scoring::SurveyResults;
use crate::ports::{ExportError, ResultsExporter};

/// Renders `SurveyResults` as a CSV blob for download.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultsExporter for CsvExporter {
    fn export(&self, results: &SurveyResults) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record([
                "value_name",
                "value_score",
                "question_text",
                "question_score",
                "question_responses",
            ])
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        for value_score in &results.value_scores {
            for question_score in &value_score.question_scores {
                writer
                    .write_record([
                        value_score.value_name.as_str(),
                        &value_score.score.value().to_string(),
                        question_score.question_text.as_str(),
                        &question_score.score.value().to_string(),
                        &question_score.total_responses.to_string(),
                    ])
                    .map_err(|e| ExportError::Serialization(e.to_string()))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
