#![allow(dead_code)]

use bevy_ecs::prelude::World;
use dispatch_core::runner::initialize_simulation;
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::telemetry::MetricsLog;

use super::schedule::ScheduleRunner;

/// Build a world for `params` with the start event already scheduled.
pub fn started_world(params: &ScenarioParams) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params).expect("test params should be valid");
    initialize_simulation(&mut world);
    world
}

/// Run `params` to its horizon and hand back the finished world.
pub fn run_to_horizon(params: &ScenarioParams) -> World {
    let mut world = started_world(params);
    ScheduleRunner::new().run_full(&mut world);
    world
}

/// Snapshot of the series a finished run produced, for equality checks.
#[derive(Debug, Default, PartialEq)]
pub struct RunOutput {
    pub waits: Vec<f64>,
    pub totals: Vec<f64>,
    pub samples: Vec<(f64, usize)>,
    pub orders_placed: u64,
}

pub fn run_output(world: &World) -> RunOutput {
    let metrics = world.resource::<MetricsLog>();
    RunOutput {
        waits: metrics.waits.clone(),
        totals: metrics.totals.clone(),
        samples: metrics
            .queue_samples
            .iter()
            .map(|s| (s.timestamp, s.queue_length))
            .collect(),
        orders_placed: metrics.orders_placed,
    }
}
