//! Per-job failure aggregation.
//!
//! Collapses the loader's observation stream into one row per job, ranked
//! by total failure count.

use std::collections::HashMap;

use chart_core::models::{AggregatedRow, Observation};

// ── Public API ────────────────────────────────────────────────────────────────

/// Group observations by job name, sum the failure counts within each group,
/// and rank the rows by `total_failures` descending.
///
/// Jobs with equal totals keep their first-seen order, so the result is
/// deterministic for a given input. An empty input produces an empty table,
/// which is a valid outcome, not an error.
pub fn aggregate(observations: &[Observation]) -> Vec<AggregatedRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<AggregatedRow> = Vec::new();

    for obs in observations {
        match index.get(&obs.job_name) {
            Some(&i) => rows[i].total_failures += obs.failures,
            None => {
                index.insert(obs.job_name.clone(), rows.len());
                rows.push(AggregatedRow {
                    job_name: obs.job_name.clone(),
                    total_failures: obs.failures,
                });
            }
        }
    }

    // Stable sort keeps first-seen order for equal totals.
    rows.sort_by(|a, b| b.total_failures.cmp(&a.total_failures));
    rows
}

/// Sum of all failure totals in the table.
pub fn total_failures(rows: &[AggregatedRow]) -> u64 {
    rows.iter().map(|r| r.total_failures).sum()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
