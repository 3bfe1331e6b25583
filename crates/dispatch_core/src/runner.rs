//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each step
//! pops the next event from [SimulationClock], inserts it as [CurrentEvent],
//! then runs the schedule. Exactly one process system reacts to each event.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::{apply_deferred, ExecutorKind, IntoSystemConfigs};

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::error::{SimError, SimResult};
use crate::scenario::SimulationHorizon;
use crate::systems::{
    delivery_completed::delivery_completed_system, driver_assigned::driver_assigned_system,
    order_arrival::order_arrival_system, queue_monitor::queue_monitor_system,
    simulation_started::simulation_started_system,
};
use crate::telemetry::SimulationFault;

fn is_simulation_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SimulationStarted)
        .unwrap_or(false)
}

fn is_order_arrival(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::OrderArrival)
        .unwrap_or(false)
}

fn is_driver_assigned(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DriverAssigned)
        .unwrap_or(false)
}

fn is_delivery_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DeliveryCompleted)
        .unwrap_or(false)
}

fn is_monitor_sample(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::MonitorSample)
        .unwrap_or(false)
}

/// Pops the next event if it falls within the horizon (when a [SimulationHorizon]
/// is present). Events past the horizon stay in the clock, unprocessed.
fn pop_within_horizon(world: &mut World) -> SimResult<Option<Event>> {
    let horizon = world.get_resource::<SimulationHorizon>().map(|h| h.0);
    let mut clock = world
        .get_resource_mut::<SimulationClock>()
        .ok_or(SimError::MissingResource("SimulationClock"))?;
    if let (Some(horizon), Some(ts)) = (horizon, clock.next_event_time()) {
        if ts > horizon {
            return Ok(None);
        }
    }
    Ok(clock.pop_next())
}

fn take_fault(world: &mut World) -> SimResult<()> {
    match world
        .get_resource_mut::<SimulationFault>()
        .and_then(|mut fault| fault.0.take())
    {
        Some(message) => Err(SimError::InvariantViolation(message)),
        None => Ok(()),
    }
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent], then runs the schedule.
/// Returns `Ok(true)` if an event was processed, `Ok(false)` if the clock was empty or the next
/// event lies past the [SimulationHorizon]. A fault recorded by a system during the step is
/// returned as [SimError::InvariantViolation].
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> SimResult<bool> {
    run_next_event_with_hook(world, schedule, |_, _| {})
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    mut hook: F,
) -> SimResult<bool>
where
    F: FnMut(&World, &Event),
{
    let Some(event) = pop_within_horizon(world)? else {
        return Ok(false);
    };
    world.insert_resource(CurrentEvent(event));

    schedule.run(world);
    take_fault(world)?;
    hook(world, &event);
    Ok(true)
}

/// Runs simulation steps until the event queue is empty, the horizon is reached, or
/// `max_steps` is reached. Returns the number of steps executed.
pub fn run_until_empty(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
) -> SimResult<usize> {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule)? {
        steps += 1;
    }
    Ok(steps)
}

/// Runs until no event remains at or before the [SimulationHorizon].
///
/// The order generator reschedules itself forever, so the horizon is the only
/// stopping condition. Returns the number of steps executed.
pub fn run_until_horizon(world: &mut World, schedule: &mut Schedule) -> SimResult<usize> {
    run_until_horizon_with_hook(world, schedule, |_, _| {})
}

/// [run_until_horizon] with a `hook` invoked after every step.
pub fn run_until_horizon_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    mut hook: F,
) -> SimResult<usize>
where
    F: FnMut(&World, &Event),
{
    if world.get_resource::<SimulationHorizon>().is_none() {
        return Err(SimError::MissingResource("SimulationHorizon"));
    }
    let mut steps = 0;
    while run_next_event_with_hook(world, schedule, &mut hook)? {
        steps += 1;
    }
    if let Some(clock) = world.get_resource::<SimulationClock>() {
        log::debug!(
            "horizon reached after {steps} steps at t={}; {} events left unprocessed",
            clock.now(),
            clock.pending()
        );
    }
    Ok(steps)
}

/// Builds the simulation schedule: one system per process step, each gated on the
/// kind of the current event, plus [apply_deferred] so spawned orders exist before
/// the next step.
///
/// The schedule runs single-threaded; only one process ever has control.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.add_systems(
        (
            simulation_started_system.run_if(is_simulation_started),
            order_arrival_system.run_if(is_order_arrival),
            driver_assigned_system.run_if(is_driver_assigned),
            delivery_completed_system.run_if(is_delivery_completed),
            queue_monitor_system.run_if(is_monitor_sample),
            apply_deferred,
        )
            .chain(),
    );

    schedule
}

/// Initializes the simulation by scheduling the SimulationStarted event at time 0.
/// Call this after building the scenario and before running events.
pub fn initialize_simulation(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0.0, EventKind::SimulationStarted, None);
}
