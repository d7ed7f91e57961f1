//! Survey definition adapters.

mod demo;
mod yaml_provider;

pub use demo::DemoSurveyProvider;
pub use yaml_provider::YamlSurveyProvider;
