//! Survey module - Static survey definition and the response corpus.

mod definition;
mod response;

pub use definition::{Question, SurveyDefinition, Value};
pub use response::{Response, ResponseCorpus};
