//! Shared types for the failure chart tool.
//!
//! Error taxonomy, the input data model, CLI settings, and the
//! central-tendency statistics used for computed reference lines.

pub mod error;
pub mod models;
pub mod settings;
pub mod stats;
