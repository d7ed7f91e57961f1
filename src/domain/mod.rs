//! Domain layer - Survey vocabulary, scoring, and flow logic.

pub mod flow;
pub mod foundation;
pub mod scoring;
pub mod survey;
