use bevy_ecs::prelude::{Commands, Query, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::ecs::{DeliveryOrder, DeliveryStage};
use crate::pool::DriverPool;
use crate::telemetry::{DeliveryRecord, MetricsLog, SimulationFault};

/// Delivery resumes after its service time: hand the driver back (possibly
/// straight to the next queued order), record the delivery and despawn it.
pub fn delivery_completed_system(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    mut pool: ResMut<DriverPool>,
    mut metrics: ResMut<MetricsLog>,
    mut fault: ResMut<SimulationFault>,
    orders: Query<&DeliveryOrder>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::DeliveryCompleted {
        return;
    }

    let Some(entity) = event.0.subject else {
        fault.record("delivery completed without a subject order");
        return;
    };
    let Ok(order) = orders.get(entity) else {
        fault.record(format!("completion for unknown order entity {entity:?}"));
        return;
    };
    let (DeliveryStage::InService, Some(granted_at)) = (order.stage, order.granted_at) else {
        fault.record(format!("order {} completed without holding a driver", order.id));
        return;
    };

    match pool.release() {
        Ok(Some(next)) => clock.schedule_in(0.0, EventKind::DriverAssigned, Some(next)),
        Ok(None) => {}
        Err(err) => {
            fault.record(err.to_string());
            return;
        }
    }

    metrics.record_delivery(DeliveryRecord {
        order_id: order.id,
        arrived_at: order.arrived_at,
        granted_at,
        completed_at: clock.now(),
    });
    commands.entity(entity).despawn();
}
