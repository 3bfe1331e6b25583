use crate::error::ExperimentResult;
use crate::metrics::ScenarioResult;

pub(crate) fn export_summary_csv_impl(
    results: &[ScenarioResult],
    file: std::fs::File,
) -> ExperimentResult<()> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "num_drivers",
        "seed",
        "horizon",
        "orders_placed",
        "deliveries_completed",
        "avg_wait",
        "median_wait",
        "p90_wait",
        "avg_delivery",
        "utilization_pct",
        "service_utilization_pct",
        "max_queue_length",
    ])?;

    for result in results {
        wtr.write_record([
            result.experiment_id.clone(),
            result.run_id.to_string(),
            result.num_drivers.to_string(),
            result.seed.to_string(),
            result.horizon.to_string(),
            result.orders_placed.to_string(),
            result.deliveries_completed.to_string(),
            result.avg_wait.to_string(),
            result.median_wait.to_string(),
            result.p90_wait.to_string(),
            result.avg_delivery.to_string(),
            result.utilization_pct.to_string(),
            result.service_utilization_pct.to_string(),
            result.max_queue_length.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_queue_series_csv_impl(
    results: &[ScenarioResult],
    file: std::fs::File,
) -> ExperimentResult<()> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["run_id", "num_drivers", "timestamp", "queue_length"])?;
    for result in results {
        for sample in &result.queue_samples {
            wtr.write_record([
                result.run_id.to_string(),
                result.num_drivers.to_string(),
                sample.timestamp.to_string(),
                sample.queue_length.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
