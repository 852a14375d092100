use clap::Parser;
use std::path::PathBuf;

use crate::models::{Orientation, ThresholdMode};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Chart end-to-end job failures from a JSON results log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "failure-chart",
    about = "Chart end-to-end job failures from a JSON results log",
    version
)]
pub struct Settings {
    /// Path to the JSON results log
    pub source: PathBuf,

    /// Output image path
    #[arg(long, default_value = "failures_histogram.png")]
    pub output: PathBuf,

    /// Bar orientation
    #[arg(long, value_enum, default_value = "vertical")]
    pub orientation: Orientation,

    /// Reference line mode
    #[arg(long, value_enum, default_value = "fixed")]
    pub threshold_mode: ThresholdMode,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Log level with the `--debug` override applied.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
