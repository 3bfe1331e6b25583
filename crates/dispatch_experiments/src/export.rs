//! Result export.
//!
//! Writes the per-scenario summary and the queue-depth series to CSV, and full
//! results (series included) to JSON.

use std::path::Path;

use crate::error::ExperimentResult;
use crate::metrics::ScenarioResult;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export one summary row per scenario to CSV, keyed by experiment and run id.
///
/// # Errors
///
/// Returns an error if `results` is empty, or if file creation or CSV writing fails.
pub fn export_summary_csv(
    results: &[ScenarioResult],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_summary_csv_impl(results, file)
}

/// Export every queue-depth sample of every scenario to CSV in long format:
/// one `(run_id, num_drivers, timestamp, queue_length)` row per sample.
///
/// # Errors
///
/// Returns an error if `results` is empty, or if file creation or CSV writing fails.
pub fn export_queue_series_csv(
    results: &[ScenarioResult],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_queue_series_csv_impl(results, file)
}

/// Export full scenario results to a JSON array.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    results: &[ScenarioResult],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}
