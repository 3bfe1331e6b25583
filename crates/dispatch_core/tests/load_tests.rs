//! Load tests for dispatch_core: validate throughput on long horizons.

mod support;

use std::time::Instant;

use dispatch_core::scenario::ScenarioParams;
use support::schedule::ScheduleRunner;
use support::world::started_world;

#[test]
#[ignore] // Only run explicitly: cargo test --package dispatch_core --test load_tests -- --ignored
fn test_sustained_load() {
    let params = ScenarioParams::default()
        .with_num_drivers(50)
        .with_order_interval(0.5)
        .with_horizon(100_000.0);
    let mut world = started_world(&params);

    let start = Instant::now();
    let events = ScheduleRunner::new().run_full(&mut world);
    let duration = start.elapsed();

    let events_per_sec = events as f64 / duration.as_secs_f64();
    println!(
        "Sustained load test: {} events in {:.2}s ({:.0} events/sec)",
        events,
        duration.as_secs_f64(),
        events_per_sec
    );
    assert!(
        events_per_sec > 10_000.0,
        "Should process >10000 events/sec, got {:.0}",
        events_per_sec
    );
}

#[test]
#[ignore]
fn test_unbounded_backlog() {
    // Arrivals far outpace service: the wait queue grows without bound.
    let params = ScenarioParams::default()
        .with_num_drivers(1)
        .with_order_interval(0.01)
        .with_horizon(2_000.0);
    let mut world = started_world(&params);

    let start = Instant::now();
    let events = ScheduleRunner::new().run_full(&mut world);
    println!(
        "Backlog load test: {} events in {:.2}s",
        events,
        start.elapsed().as_secs_f64()
    );
    assert!(events > 150_000);
}
