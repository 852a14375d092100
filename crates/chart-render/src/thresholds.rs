//! Reference-line selection for the rendered chart.

use chart_core::models::{AggregatedRow, ThresholdMode};
use chart_core::stats;
use plotters::style::colors::{GREEN, RED};
use plotters::style::RGBColor;

/// Upper fixed reference line, in failures.
pub const FIXED_UPPER: u64 = 8;
/// Lower fixed reference line, in failures.
pub const FIXED_LOWER: u64 = 5;

// ── ThresholdLine ─────────────────────────────────────────────────────────────

/// One dashed reference line drawn across the bars.
#[derive(Debug, Clone)]
pub struct ThresholdLine {
    /// Position on the failure-count axis.
    pub value: f64,
    /// Legend text identifying the line.
    pub label: String,
    /// Line and legend color.
    pub color: RGBColor,
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Build the two reference lines for `mode` against the aggregated table.
///
/// Fixed mode uses the 8/5 failure thresholds; computed mode derives mean
/// and median from the per-job totals being charted.
pub fn threshold_lines(mode: ThresholdMode, rows: &[AggregatedRow]) -> Vec<ThresholdLine> {
    match mode {
        ThresholdMode::Fixed => vec![
            ThresholdLine {
                value: FIXED_UPPER as f64,
                label: format!("Threshold: {} failures", FIXED_UPPER),
                color: RED,
            },
            ThresholdLine {
                value: FIXED_LOWER as f64,
                label: format!("Threshold: {} failures", FIXED_LOWER),
                color: GREEN,
            },
        ],
        ThresholdMode::Computed => {
            let totals: Vec<u64> = rows.iter().map(|r| r.total_failures).collect();
            let mean = stats::mean(&totals);
            let median = stats::median(&totals);
            vec![
                ThresholdLine {
                    value: mean,
                    label: format!("Mean: {:.1}", mean),
                    color: RED,
                },
                ThresholdLine {
                    value: median,
                    label: format!("Median: {:.1}", median),
                    color: GREEN,
                },
            ]
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
