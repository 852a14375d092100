mod bootstrap;

use anyhow::Result;
use chart_core::error::ChartError;
use chart_core::settings::Settings;
use chart_data::{aggregator, loader};
use chart_render::{render_chart, thresholds, RenderConfig};
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("failure-chart v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Source: {}, orientation: {:?}, thresholds: {:?}",
        settings.source.display(),
        settings.orientation,
        settings.threshold_mode
    );

    // A missing log file is an operational notice, not a crash: report it
    // and exit cleanly without producing an artifact. Malformed input, by
    // contrast, fails the whole run.
    let observations = match loader::load_observations(&settings.source) {
        Ok(observations) => observations,
        Err(ChartError::SourceNotFound(path)) => {
            eprintln!("Error: log file {} not found.", path.display());
            return Ok(());
        }
        Err(err @ ChartError::SourceRead { .. }) => {
            eprintln!("Error: {}", err);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if observations.is_empty() {
        println!("No failures found.");
        return Ok(());
    }

    let rows = aggregator::aggregate(&observations);
    tracing::info!(
        "Aggregated {} observations into {} jobs ({} failures in total)",
        observations.len(),
        rows.len(),
        aggregator::total_failures(&rows)
    );

    let lines = thresholds::threshold_lines(settings.threshold_mode, &rows);
    let config = RenderConfig::new(settings.output.clone(), settings.orientation);
    render_chart(&rows, &lines, &config)?;

    println!("Saved chart as {}", settings.output.display());
    Ok(())
}
