//! Sequential scenario execution.
//!
//! A [ScenarioRunner] keeps one [World] for its whole life. Every run rebuilds the
//! scenario in place, which clears entities, metrics, the clock and the random
//! stream, so no state carries from one pool size to the next.

use bevy_ecs::prelude::{Schedule, World};
use dispatch_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use dispatch_core::scenario::build_scenario;
use dispatch_core::SimResult;
use indicatif::{ProgressBar, ProgressStyle};

use crate::metrics::{extract_result, ScenarioResult};
use crate::parameters::{ParameterSet, SweepConfig};

pub struct ScenarioRunner {
    world: World,
    schedule: Schedule,
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            schedule: simulation_schedule(),
        }
    }

    /// Run one scenario to its horizon and summarise it.
    pub fn run(&mut self, param_set: &ParameterSet) -> SimResult<ScenarioResult> {
        let params = &param_set.params;
        log::info!(
            "scenario start: experiment={} run={} drivers={} seed={} horizon={}",
            param_set.experiment_id,
            param_set.run_id,
            params.num_drivers,
            params.seed,
            params.horizon
        );

        build_scenario(&mut self.world, params)?;
        initialize_simulation(&mut self.world);
        let steps = run_until_horizon(&mut self.world, &mut self.schedule)?;

        let result = extract_result(&self.world, param_set)?;
        log::info!(
            "scenario done: run={} drivers={} steps={} deliveries={} avg_wait={:.2} utilization={:.1}%",
            result.run_id,
            result.num_drivers,
            steps,
            result.deliveries_completed,
            result.avg_wait,
            result.utilization_pct
        );
        if result.backlog_growing() {
            log::warn!(
                "queue grew from {} to {} orders with {} drivers; the pool cannot keep up",
                result.queue_samples.first().map_or(0, |s| s.queue_length),
                result.queue_samples.last().map_or(0, |s| s.queue_length),
                result.num_drivers
            );
        }
        Ok(result)
    }
}

/// Run every pool size of a sweep in order, on one reused world.
///
/// The sweep is validated up front; the first failing scenario aborts the rest.
pub fn run_sweep(config: &SweepConfig, show_progress: bool) -> SimResult<Vec<ScenarioResult>> {
    config.validate()?;
    let parameter_sets = config.generate();

    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Some(bar)
    } else {
        None
    };

    let mut runner = ScenarioRunner::new();
    let mut results = Vec::with_capacity(total);
    for param_set in &parameter_sets {
        results.push(runner.run(param_set)?);
        if let Some(ref progress_bar) = pb {
            progress_bar.inc(1);
        }
    }

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    Ok(results)
}
