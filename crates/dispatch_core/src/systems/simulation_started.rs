use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::distributions::RandomStream;
use crate::generator::OrderGenerator;

/// Starts the two long-running processes: the order generator sleeps until its
/// first arrival, the queue monitor takes its first sample immediately.
pub fn simulation_started_system(
    mut clock: ResMut<SimulationClock>,
    mut stream: ResMut<RandomStream>,
    generator: Res<OrderGenerator>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }

    let gap = generator.sample_gap(&mut stream);
    clock.schedule_in(gap, EventKind::OrderArrival, None);
    clock.schedule_in(0.0, EventKind::MonitorSample, None);
}
