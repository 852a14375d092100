//! Bar-chart drawing.
//!
//! Turns the aggregated table into a PNG via plotters, with dashed
//! reference lines and a legend.

use std::path::PathBuf;

use chart_core::error::{ChartError, Result};
use chart_core::models::{AggregatedRow, Orientation};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::debug;

use crate::thresholds::ThresholdLine;

// ── Chart constants ───────────────────────────────────────────────────────────

/// Sky-blue bar fill.
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const CHART_TITLE: &str = "Histogram of Failures by Job Name";
const JOB_AXIS_LABEL: &str = "Job Name";
const COUNT_AXIS_LABEL: &str = "Number of Failures";

// ── RenderConfig ──────────────────────────────────────────────────────────────

/// Output artifact settings for one render pass.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Destination PNG, overwritten on each run.
    pub output_path: PathBuf,
    /// Bar direction.
    pub orientation: Orientation,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl RenderConfig {
    /// 1000x600 pixels.
    pub fn new(output_path: PathBuf, orientation: Orientation) -> Self {
        Self {
            output_path,
            orientation,
            width: 1000,
            height: 600,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Render `rows` as a bar chart with dashed reference lines and a legend,
/// overwriting `config.output_path`.
///
/// The table must satisfy the aggregation invariants (unique, ranked rows);
/// the caller skips rendering entirely when the table is empty.
pub fn render_chart(
    rows: &[AggregatedRow],
    lines: &[ThresholdLine],
    config: &RenderConfig,
) -> Result<()> {
    debug!(
        "Rendering {} bars to {}",
        rows.len(),
        config.output_path.display()
    );

    let drawn = match config.orientation {
        Orientation::Vertical => draw_vertical(rows, lines, config),
        Orientation::Horizontal => draw_horizontal(rows, lines, config),
    };

    drawn.map_err(|e| ChartError::Render {
        path: config.output_path.clone(),
        detail: e.to_string(),
    })
}

// ── Drawing internals ─────────────────────────────────────────────────────────

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Largest value the count axis must cover: the tallest bar or the highest
/// reference line, padded so nothing touches the chart edge.
fn count_axis_max(rows: &[AggregatedRow], lines: &[ThresholdLine]) -> f64 {
    let bar_max = rows.iter().map(|r| r.total_failures).max().unwrap_or(0) as f64;
    let line_max = lines.iter().map(|l| l.value).fold(0.0f64, f64::max);
    (bar_max.max(line_max) * 1.1).max(1.0)
}

/// Tick label for the job axis. Bars are centered on integer coordinates;
/// anything off-center or out of range gets a blank label.
fn job_label(rows: &[AggregatedRow], coord: f64) -> String {
    let nearest = coord.round();
    if (coord - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    match rows.get(nearest as usize) {
        Some(row) => row.job_name.clone(),
        None => String::new(),
    }
}

fn draw_vertical(
    rows: &[AggregatedRow],
    lines: &[ThresholdLine],
    config: &RenderConfig,
) -> DrawResult {
    let root = BitMapBackend::new(&config.output_path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let n = rows.len() as f64;
    let y_max = count_axis_max(rows, lines);

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n - 0.5), 0f64..y_max)?;

    // Grid on the count axis only.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|x| job_label(rows, *x))
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(JOB_AXIS_LABEL)
        .y_desc(COUNT_AXIS_LABEL)
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let x = i as f64;
        Rectangle::new(
            [(x - 0.4, 0.0), (x + 0.4, row.total_failures as f64)],
            BAR_COLOR.filled(),
        )
    }))?;

    for line in lines {
        let color = line.color;
        chart
            .draw_series(DashedLineSeries::new(
                vec![(-0.5f64, line.value), (n - 0.5, line.value)],
                8,
                6,
                color.stroke_width(2),
            ))?
            .label(line.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_horizontal(
    rows: &[AggregatedRow],
    lines: &[ThresholdLine],
    config: &RenderConfig,
) -> DrawResult {
    let root = BitMapBackend::new(&config.output_path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let n = rows.len() as f64;
    let x_max = count_axis_max(rows, lines);

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(160)
        .build_cartesian_2d(0f64..x_max, -0.5f64..(n - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(rows.len())
        .y_label_formatter(&|y| job_label(rows, *y))
        .x_desc(COUNT_AXIS_LABEL)
        .y_desc(JOB_AXIS_LABEL)
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let y = i as f64;
        Rectangle::new(
            [(0.0, y - 0.4), (row.total_failures as f64, y + 0.4)],
            BAR_COLOR.filled(),
        )
    }))?;

    for line in lines {
        let color = line.color;
        chart
            .draw_series(DashedLineSeries::new(
                vec![(line.value, -0.5f64), (line.value, n - 0.5)],
                8,
                6,
                color.stroke_width(2),
            ))?
            .label(line.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::{threshold_lines, ThresholdLine};
    use chart_core::models::ThresholdMode;
    use plotters::style::colors::RED;
    use tempfile::TempDir;

    fn row(name: &str, total: u64) -> AggregatedRow {
        AggregatedRow {
            job_name: name.to_string(),
            total_failures: total,
        }
    }

    fn sample_rows() -> Vec<AggregatedRow> {
        vec![row("e2e-deploy", 12), row("e2e-build", 6), row("e2e-lint", 2)]
    }

    #[test]
    fn test_render_vertical_fixed_writes_png() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("chart.png");
        let rows = sample_rows();
        let lines = threshold_lines(ThresholdMode::Fixed, &rows);
        let config = RenderConfig::new(output.clone(), Orientation::Vertical);

        render_chart(&rows, &lines, &config).unwrap();

        assert!(output.is_file());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_render_horizontal_computed_writes_png() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("chart.png");
        let rows = sample_rows();
        let lines = threshold_lines(ThresholdMode::Computed, &rows);
        let config = RenderConfig::new(output.clone(), Orientation::Horizontal);

        render_chart(&rows, &lines, &config).unwrap();

        assert!(output.is_file());
    }

    #[test]
    fn test_render_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("chart.png");
        std::fs::write(&output, b"stale").unwrap();

        let rows = sample_rows();
        let lines = threshold_lines(ThresholdMode::Fixed, &rows);
        let config = RenderConfig::new(output.clone(), Orientation::Vertical);

        render_chart(&rows, &lines, &config).unwrap();

        // The placeholder bytes are gone, replaced by a real image.
        assert!(std::fs::metadata(&output).unwrap().len() > 5);
    }

    #[test]
    fn test_render_single_row() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("chart.png");
        let rows = vec![row("only-job", 1)];
        let lines = threshold_lines(ThresholdMode::Computed, &rows);
        let config = RenderConfig::new(output.clone(), Orientation::Vertical);

        render_chart(&rows, &lines, &config).unwrap();
        assert!(output.is_file());
    }

    #[test]
    fn test_count_axis_max_covers_lines_above_bars() {
        let rows = vec![row("A", 3)];
        let lines = vec![ThresholdLine {
            value: 8.0,
            label: "Threshold: 8 failures".to_string(),
            color: RED,
        }];

        assert!(count_axis_max(&rows, &lines) >= 8.0);
    }

    #[test]
    fn test_job_label_centers_and_bounds() {
        let rows = sample_rows();
        assert_eq!(job_label(&rows, 0.0), "e2e-deploy");
        assert_eq!(job_label(&rows, 2.0), "e2e-lint");
        assert_eq!(job_label(&rows, 0.5), "");
        assert_eq!(job_label(&rows, 3.0), "");
        assert_eq!(job_label(&rows, -1.0), "");
    }
}
