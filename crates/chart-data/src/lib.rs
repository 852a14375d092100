//! Data pipeline for the failure chart tool.
//!
//! Loads a JSON test-run results log into per-job failure observations and
//! aggregates them into the ranked table consumed by the renderer.

pub mod aggregator;
pub mod loader;

pub use chart_core as core;
