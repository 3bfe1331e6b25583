//! Telemetry / KPIs: per-delivery timings and queue-depth samples for one run.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// One completed delivery, recorded when its service time ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeliveryRecord {
    pub order_id: u64,
    pub arrived_at: f64,
    pub granted_at: f64,
    pub completed_at: f64,
}

impl DeliveryRecord {
    /// Time from order placement to driver grant.
    pub fn wait(&self) -> f64 {
        self.granted_at - self.arrived_at
    }

    /// Time the driver spent on this delivery.
    pub fn service_time(&self) -> f64 {
        self.completed_at - self.granted_at
    }

    /// Time from order placement to delivery.
    pub fn total(&self) -> f64 {
        self.completed_at - self.arrived_at
    }
}

/// Queue depth observed by the monitor at `timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueueSample {
    pub timestamp: f64,
    pub queue_length: usize,
}

/// Scenario-scoped metrics shared by every delivery and the monitor.
///
/// `waits` grows when a driver is granted, `totals` when a delivery completes,
/// so at the horizon `waits` can hold entries for orders still in service.
#[derive(Debug, Default, Resource)]
pub struct MetricsLog {
    pub waits: Vec<f64>,
    pub totals: Vec<f64>,
    pub queue_samples: Vec<QueueSample>,
    pub completed: Vec<DeliveryRecord>,
    pub orders_placed: u64,
}

impl MetricsLog {
    pub fn record_wait(&mut self, wait: f64) {
        self.waits.push(wait);
    }

    pub fn record_delivery(&mut self, record: DeliveryRecord) {
        self.totals.push(record.total());
        self.completed.push(record);
    }

    pub fn record_sample(&mut self, timestamp: f64, queue_length: usize) {
        self.queue_samples.push(QueueSample {
            timestamp,
            queue_length,
        });
    }

    /// Sum of service time across completed deliveries.
    pub fn busy_time(&self) -> f64 {
        self.completed.iter().map(DeliveryRecord::service_time).sum()
    }
}

/// First invariant violation a system ran into during the current step.
/// The runner takes it after each step and fails the run.
#[derive(Debug, Default, Resource)]
pub struct SimulationFault(pub Option<String>);

impl SimulationFault {
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("simulation fault: {message}");
        if self.0.is_none() {
            self.0 = Some(message);
        }
    }
}
