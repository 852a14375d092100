//! JSON results-log loading.
//!
//! Reads a test-run log and extracts one [`Observation`] per job result
//! with a nonzero failure count.

use std::path::Path;

use chart_core::error::{ChartError, Result};
use chart_core::models::{LogEntry, Observation};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `source` and extract all observations with `failures > 0`.
///
/// * A missing file maps to [`ChartError::SourceNotFound`] so the caller can
///   treat it as an operational notice rather than a crash.
/// * Content that is not a JSON array of run entries, including a job record
///   missing its `failures` field, maps to [`ChartError::MalformedSource`].
///   The whole run fails; bad records are never skipped silently, because
///   failure counts feed release decisions.
///
/// Entries are processed in log order, so the returned sequence is
/// deterministic for a given input.
pub fn load_observations(source: &Path) -> Result<Vec<Observation>> {
    let content = read_source(source)?;
    let entries = parse_entries(source, &content)?;
    Ok(extract_observations(&entries))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_source(source: &Path) -> Result<String> {
    if !source.exists() {
        warn!("Log file does not exist: {}", source.display());
        return Err(ChartError::SourceNotFound(source.to_path_buf()));
    }

    std::fs::read_to_string(source).map_err(|e| ChartError::SourceRead {
        path: source.to_path_buf(),
        source: e,
    })
}

fn parse_entries(source: &Path, content: &str) -> Result<Vec<LogEntry>> {
    serde_json::from_str(content).map_err(|e| ChartError::MalformedSource {
        path: source.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Walk every entry's job results and keep the nonzero failure counts.
/// Runs without a `jobs` key contribute nothing.
fn extract_observations(entries: &[LogEntry]) -> Vec<Observation> {
    let mut observations: Vec<Observation> = Vec::new();

    for entry in entries {
        for job in &entry.jobs {
            if job.failures > 0 {
                observations.push(Observation {
                    job_name: job.job_name.clone(),
                    failures: job.failures,
                });
            }
        }
    }

    debug!(
        "Extracted {} observations from {} log entries",
        observations.len(),
        entries.len()
    );

    observations
}

// ── Tests ─────────────────────────────────────────────────────────────────────
