//! Run the reference scenario (3 drivers, 480 time units) and print completed deliveries.
//!
//! Run with: cargo run -p dispatch_core --example scenario_run

use bevy_ecs::prelude::World;
use dispatch_core::clock::SimulationClock;
use dispatch_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::telemetry::MetricsLog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const NUM_DRIVERS: usize = 3;
    const SAMPLE: usize = 20;

    let params = ScenarioParams::default().with_num_drivers(NUM_DRIVERS);
    let mut world = World::new();
    build_scenario(&mut world, &params)?;
    initialize_simulation(&mut world);

    let mut schedule = simulation_schedule();
    let steps = run_until_horizon(&mut world, &mut schedule)?;

    let metrics = world.resource::<MetricsLog>();
    let clock = world.resource::<SimulationClock>();

    println!(
        "--- Scenario run ({} drivers, horizon {}, seed {}) ---",
        NUM_DRIVERS, params.horizon, params.seed
    );
    println!("Steps executed: {}", steps);
    println!("Last event at: {:.2}", clock.now());
    println!("Orders placed: {}", metrics.orders_placed);
    println!("Completed deliveries: {}", metrics.completed.len());

    println!("\nSample completed deliveries (first {}):", SAMPLE);
    for r in metrics.completed.iter().take(SAMPLE) {
        println!(
            "  order {:>3}  arrived={:7.2}  wait={:6.2}  service={:6.2}  total={:6.2}",
            r.order_id,
            r.arrived_at,
            r.wait(),
            r.service_time(),
            r.total(),
        );
    }
    if metrics.completed.len() > SAMPLE {
        println!("  ... and {} more", metrics.completed.len() - SAMPLE);
    }
    Ok(())
}
