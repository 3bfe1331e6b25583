use bevy_ecs::prelude::World;

use crate::clock::SimulationClock;
use crate::distributions::RandomStream;
use crate::error::ConfigError;
use crate::generator::OrderGenerator;
use crate::pool::DriverPool;
use crate::scenario::params::{
    QueueMonitorConfig, ScenarioParams, ServiceTimeConfig, SimulationHorizon,
};
use crate::telemetry::{MetricsLog, SimulationFault};

/// Build a scenario into `world`: validates `params`, then wipes every entity
/// and resource already in the world and inserts a fresh clock, driver pool,
/// random stream (rewound to the seed) and an empty metrics log.
///
/// Reusing a world across scenarios is safe: nothing from an earlier run
/// survives this call. On a configuration error the world is left untouched.
pub fn build_scenario(world: &mut World, params: &ScenarioParams) -> Result<(), ConfigError> {
    params.validate()?;

    world.clear_all();

    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimulationHorizon(params.horizon));
    world.insert_resource(RandomStream::new(params.seed));
    world.insert_resource(DriverPool::new(params.num_drivers));
    world.insert_resource(OrderGenerator::new(params.order_interval));
    world.insert_resource(ServiceTimeConfig {
        min: params.service_time_min,
        max: params.service_time_max,
    });
    world.insert_resource(QueueMonitorConfig {
        interval: params.monitor_interval,
    });
    world.insert_resource(MetricsLog::default());
    world.insert_resource(SimulationFault::default());

    log::debug!(
        "scenario built: drivers={} horizon={} interval={} service=[{}, {}] seed={}",
        params.num_drivers,
        params.horizon,
        params.order_interval,
        params.service_time_min,
        params.service_time_max,
        params.seed
    );
    Ok(())
}
