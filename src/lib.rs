//! Pulse Survey - Engagement Survey Application Core
//!
//! This crate implements a Likert-scale engagement survey: a questionnaire
//! flow state machine, a pure scoring engine that aggregates responses into
//! per-value percentage scores, and the boundary ports for persistence,
//! survey definitions, and results export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
