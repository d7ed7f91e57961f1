//! Adapters - Concrete implementations of the boundary ports.

pub mod export;
pub mod persistence;
pub mod storage;
pub mod survey;

pub use export::CsvExporter;
pub use persistence::ResponseStore;
pub use storage::{FileBlobStore, InMemoryBlobStore};
pub use survey::{DemoSurveyProvider, YamlSurveyProvider};
