//! Ports - Boundary contracts the core depends on.
//!
//! Implementations live in `adapters`; the domain and application layers
//! only ever see these traits.

mod blob_store;
mod results_exporter;
mod survey_provider;

pub use blob_store::{BlobStore, BlobStoreError};
pub use results_exporter::{ExportError, ResultsExporter};
pub use survey_provider::{SurveyProvider, SurveyProviderError};
