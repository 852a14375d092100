// ── Central-tendency helpers ──────────────────────────────────────────────────

/// Arithmetic mean of `values`.
///
/// Returns `0.0` for an empty slice.
pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

/// Median of `values` (the input does not need to be sorted).
///
/// An even-length input yields the midpoint of the two middle values.
/// Returns `0.0` for an empty slice.
pub fn median(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
