#![allow(dead_code)]

use dispatch_core::scenario::ScenarioParams;
use dispatch_experiments::ParameterSet;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seed 42, horizon 480, an order every 5 on average, service in [15, 25].
pub fn reference_set(num_drivers: usize) -> ParameterSet {
    scenario_set(ScenarioParams::default().with_num_drivers(num_drivers))
}

pub fn scenario_set(params: ScenarioParams) -> ParameterSet {
    ParameterSet::new("integration".to_string(), 0, params)
}
