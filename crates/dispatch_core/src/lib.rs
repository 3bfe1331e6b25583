//! Discrete-event simulation of a delivery dispatch queue.
//!
//! Orders arrive as a Poisson process, wait in FIFO order for one of a fixed pool
//! of drivers, hold the driver for a uniformly distributed service time, and
//! leave. The engine records per-delivery waits and totals plus a periodic
//! queue-depth series into a scenario-scoped [telemetry::MetricsLog].
//!
//! ```no_run
//! use bevy_ecs::prelude::World;
//! use dispatch_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
//! use dispatch_core::scenario::{build_scenario, ScenarioParams};
//! use dispatch_core::telemetry::MetricsLog;
//!
//! let mut world = World::new();
//! build_scenario(&mut world, &ScenarioParams::default().with_num_drivers(3)).unwrap();
//! initialize_simulation(&mut world);
//! let mut schedule = simulation_schedule();
//! run_until_horizon(&mut world, &mut schedule).unwrap();
//! println!("{} deliveries", world.resource::<MetricsLog>().totals.len());
//! ```

pub mod clock;
pub mod distributions;
pub mod ecs;
pub mod error;
pub mod generator;
pub mod pool;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{ConfigError, SimError, SimResult};
