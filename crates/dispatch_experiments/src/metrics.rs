//! Summary extraction from a finished scenario.
//!
//! Reduces the run's [MetricsLog] into a [ScenarioResult]: wait and delivery
//! statistics, utilization, and the queue-depth series.

use bevy_ecs::prelude::World;
use dispatch_core::telemetry::{MetricsLog, QueueSample};
use dispatch_core::{SimError, SimResult};

use crate::parameters::ParameterSet;

/// Aggregated metrics from a single scenario run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScenarioResult {
    /// Sweep this scenario belongs to.
    pub experiment_id: String,
    /// Position of the scenario within its sweep.
    pub run_id: usize,
    /// Driver pool capacity for this scenario.
    pub num_drivers: usize,
    pub seed: u64,
    pub horizon: f64,
    /// Orders generated before the horizon.
    pub orders_placed: u64,
    /// Deliveries whose service finished before the horizon.
    pub deliveries_completed: usize,
    /// Mean time from order to driver grant.
    pub avg_wait: f64,
    pub median_wait: f64,
    pub p90_wait: f64,
    /// Mean time from order to completed delivery.
    pub avg_delivery: f64,
    /// Sum of delivery totals over available driver time, in percent.
    /// Counts queueing time too, so it exceeds 100 under heavy load.
    pub utilization_pct: f64,
    /// Service time actually spent on deliveries over available driver time, in percent.
    pub service_utilization_pct: f64,
    pub max_queue_length: usize,
    pub queue_samples: Vec<QueueSample>,
}

impl ScenarioResult {
    /// Mean, median and p90 of `values`. Zeroes for an empty slice.
    pub fn calculate_stats(values: &[f64]) -> (f64, f64, f64) {
        if values.is_empty() {
            return (0.0, 0.0, 0.0);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let median = if sorted.len() % 2 == 0 {
            (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
        } else {
            sorted[sorted.len() / 2]
        };
        let p90_idx = ((sorted.len() - 1) as f64 * 0.9) as usize;
        let p90 = sorted[p90_idx.min(sorted.len() - 1)];

        (avg, median, p90)
    }

    /// Whether the queue ended the run deeper than it started, by more than one capacity's worth.
    pub fn backlog_growing(&self) -> bool {
        match (self.queue_samples.first(), self.queue_samples.last()) {
            (Some(first), Some(last)) => last.queue_length > first.queue_length + self.num_drivers,
            _ => false,
        }
    }
}

/// Extract the summary for a world that has been run to its horizon.
///
/// Fails with [SimError::InsufficientData] when no order was granted a driver or
/// no delivery completed, since the means would be undefined.
pub fn extract_result(world: &World, param_set: &ParameterSet) -> SimResult<ScenarioResult> {
    let params = &param_set.params;
    let metrics = world
        .get_resource::<MetricsLog>()
        .ok_or(SimError::MissingResource("MetricsLog"))?;

    if metrics.waits.is_empty() {
        return Err(SimError::InsufficientData { metric: "waits" });
    }
    if metrics.totals.is_empty() {
        return Err(SimError::InsufficientData { metric: "totals" });
    }

    let (avg_wait, median_wait, p90_wait) = ScenarioResult::calculate_stats(&metrics.waits);
    let avg_delivery = metrics.totals.iter().sum::<f64>() / metrics.totals.len() as f64;

    let driver_time = params.horizon * params.num_drivers as f64;
    let utilization_pct = 100.0 * metrics.totals.iter().sum::<f64>() / driver_time;
    let service_utilization_pct = 100.0 * metrics.busy_time() / driver_time;

    let max_queue_length = metrics
        .queue_samples
        .iter()
        .map(|s| s.queue_length)
        .max()
        .unwrap_or(0);

    Ok(ScenarioResult {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        num_drivers: params.num_drivers,
        seed: params.seed,
        horizon: params.horizon,
        orders_placed: metrics.orders_placed,
        deliveries_completed: metrics.totals.len(),
        avg_wait,
        median_wait,
        p90_wait,
        avg_delivery,
        utilization_pct,
        service_utilization_pct,
        max_queue_length,
        queue_samples: metrics.queue_samples.clone(),
    })
}
