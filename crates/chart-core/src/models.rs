use clap::ValueEnum;
use serde::Deserialize;

// ── Input log shape ────────────────────────────────────────────────────────────

/// One test-run snapshot in the input log.
///
/// Entries have no identity beyond their position; their order does not
/// affect aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    /// Per-job results for this run. An absent `jobs` key means the run
    /// recorded none, which is valid and contributes no observations.
    #[serde(default)]
    pub jobs: Vec<JobResult>,
}

/// Failure count for a single job within one run.
///
/// `failures` is required whenever the record is present. A record without
/// it makes the whole log malformed; the count is never defaulted to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct JobResult {
    /// Job identifier, used as the grouping key.
    pub job_name: String,
    /// Number of failures recorded for the job in this run.
    pub failures: u64,
}

// ── Pipeline types ─────────────────────────────────────────────────────────────

/// One (job, failures) fact extracted from the log.
///
/// `failures > 0` by construction; clean runs carry no signal and are
/// dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub job_name: String,
    pub failures: u64,
}

/// One job's summed failure count after grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    pub job_name: String,
    pub total_failures: u64,
}

// ── Chart configuration enums ──────────────────────────────────────────────────

/// Bar direction of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    /// Job names along the x axis, failure counts on the y axis.
    Vertical,
    /// Failure counts along the x axis, job names on the y axis.
    Horizontal,
}

/// How the reference lines drawn over the bars are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThresholdMode {
    /// Fixed constants (8 and 5 failures).
    Fixed,
    /// Mean and median of the aggregated per-job totals.
    Computed,
}

// ── Tests ──────────────────────────────────────────────────────────────────────
