use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::distributions::RandomStream;
use crate::ecs::{DeliveryOrder, DeliveryStage};
use crate::scenario::ServiceTimeConfig;
use crate::telemetry::{MetricsLog, SimulationFault};

/// Delivery resumes after its driver request is granted: record the wait, draw
/// a service duration and sleep until the delivery is done.
pub fn driver_assigned_system(
    mut clock: ResMut<SimulationClock>,
    mut stream: ResMut<RandomStream>,
    mut metrics: ResMut<MetricsLog>,
    mut fault: ResMut<SimulationFault>,
    service: Res<ServiceTimeConfig>,
    mut orders: Query<&mut DeliveryOrder>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::DriverAssigned {
        return;
    }

    let Some(entity) = event.0.subject else {
        fault.record("driver assigned without a subject order");
        return;
    };
    let Ok(mut order) = orders.get_mut(entity) else {
        fault.record(format!("driver assigned to unknown order entity {entity:?}"));
        return;
    };
    if order.stage != DeliveryStage::AwaitingDriver {
        fault.record(format!("order {} was granted a driver twice", order.id));
        return;
    }

    let now = clock.now();
    metrics.record_wait(now - order.arrived_at);

    let service_time = stream.uniform(service.min, service.max);
    order.stage = DeliveryStage::InService;
    order.granted_at = Some(now);

    clock.schedule_in(service_time, EventKind::DeliveryCompleted, Some(entity));
}
