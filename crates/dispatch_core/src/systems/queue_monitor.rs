use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::pool::DriverPool;
use crate::scenario::QueueMonitorConfig;
use crate::telemetry::MetricsLog;

/// Periodic monitor: sample the wait-queue depth, then sleep for one interval.
/// Reads the pool only; grant order is unaffected.
pub fn queue_monitor_system(
    mut clock: ResMut<SimulationClock>,
    mut metrics: ResMut<MetricsLog>,
    pool: Res<DriverPool>,
    config: Res<QueueMonitorConfig>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::MonitorSample {
        return;
    }

    metrics.record_sample(clock.now(), pool.queue_length());
    clock.schedule_in(config.interval, EventKind::MonitorSample, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Entity, Schedule};

    use crate::telemetry::QueueSample;
    use crate::test_helpers::{create_test_world, reference_params, set_current_event};

    #[test]
    fn samples_queue_depth_and_reschedules() {
        let params = reference_params().with_num_drivers(1);
        let mut world = create_test_world(&params);
        {
            let mut pool = world.resource_mut::<DriverPool>();
            for raw in 0..4 {
                pool.request(Entity::from_raw(raw));
            }
        }
        set_current_event(&mut world, EventKind::MonitorSample, None);

        let mut schedule = Schedule::default();
        schedule.add_systems(queue_monitor_system);
        schedule.run(&mut world);

        assert_eq!(
            world.resource::<MetricsLog>().queue_samples,
            vec![QueueSample {
                timestamp: 0.0,
                queue_length: 3
            }]
        );
        let pool = world.resource::<DriverPool>();
        assert_eq!(pool.queue_length(), 3);
        assert_eq!(pool.busy(), 1);

        let next = world
            .resource_mut::<SimulationClock>()
            .pop_next()
            .expect("next sample");
        assert_eq!(next.kind, EventKind::MonitorSample);
        assert_eq!(next.timestamp, 5.0);
    }
}
