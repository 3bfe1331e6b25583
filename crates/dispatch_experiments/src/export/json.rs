use crate::error::ExperimentResult;
use crate::metrics::ScenarioResult;

pub(crate) fn export_to_json_impl(
    results: &[ScenarioResult],
    file: std::fs::File,
) -> ExperimentResult<()> {
    serde_json::to_writer_pretty(file, results)?;
    Ok(())
}
