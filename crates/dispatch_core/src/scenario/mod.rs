//! Scenario setup: validated parameters in, a ready-to-run world out.

mod build;
mod params;

pub use build::build_scenario;
pub use params::{
    QueueMonitorConfig, ScenarioParams, ServiceTimeConfig, SimulationHorizon,
};
