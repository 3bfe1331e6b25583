//! Test helpers for common test setup and utilities.

use bevy_ecs::prelude::{Entity, World};

use crate::clock::{CurrentEvent, Event, EventKind};
use crate::ecs::DeliveryOrder;
use crate::scenario::{build_scenario, ScenarioParams};

/// The reference scenario: seed 42, 480 time units, an order every 5 units on
/// average, 15 to 25 units of service, 3 drivers.
pub fn reference_params() -> ScenarioParams {
    ScenarioParams::default()
}

/// Build a world for `params`.
///
/// # Panics
///
/// Panics if `params` is invalid.
pub fn create_test_world(params: &ScenarioParams) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params).expect("test params should be valid");
    world
}

/// Insert `kind` as the current event, as the runner would before a step.
pub fn set_current_event(world: &mut World, kind: EventKind, subject: Option<Entity>) {
    let timestamp = world.resource::<crate::clock::SimulationClock>().now();
    world.insert_resource(CurrentEvent(Event {
        timestamp,
        kind,
        subject,
    }));
}

/// Spawn an order that arrived at `arrived_at` and is waiting for a driver.
pub fn spawn_waiting_order(world: &mut World, id: u64, arrived_at: f64) -> Entity {
    world.spawn(DeliveryOrder::new(id, arrived_at)).id()
}
