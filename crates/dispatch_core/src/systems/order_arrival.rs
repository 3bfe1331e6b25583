use bevy_ecs::prelude::{Commands, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::distributions::RandomStream;
use crate::ecs::DeliveryOrder;
use crate::generator::OrderGenerator;
use crate::pool::{DriverPool, RequestOutcome};
use crate::telemetry::MetricsLog;

/// Order generator wake-up: place a new order, have it request a driver, then
/// sleep until the next arrival.
///
/// An order that gets a driver straight away is still resumed through the clock
/// (a zero-delay `DriverAssigned`), the same path a queued order takes when a
/// driver frees up.
pub fn order_arrival_system(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    mut stream: ResMut<RandomStream>,
    mut generator: ResMut<OrderGenerator>,
    mut pool: ResMut<DriverPool>,
    mut metrics: ResMut<MetricsLog>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::OrderArrival {
        return;
    }

    let now = clock.now();
    let order_id = generator.next_order_id();
    metrics.orders_placed += 1;
    let order = commands.spawn(DeliveryOrder::new(order_id, now)).id();

    match pool.request(order) {
        RequestOutcome::Granted => {
            clock.schedule_in(0.0, EventKind::DriverAssigned, Some(order));
        }
        RequestOutcome::Queued { position } => {
            log::debug!("t={now:.3} order {order_id} queued at position {position}");
        }
    }

    let gap = generator.sample_gap(&mut stream);
    clock.schedule_in(gap, EventKind::OrderArrival, None);
}
