//! Chart rendering for the failure chart tool.
//!
//! Consumes the ranked per-job failure table plus reference-line markers and
//! writes a bar-chart PNG, in either orientation.

pub mod chart;
pub mod thresholds;

pub use chart::{render_chart, RenderConfig};
pub use thresholds::{threshold_lines, ThresholdLine};
