use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStage {
    /// Requested a driver; suspended in the pool's wait queue or about to be resumed.
    AwaitingDriver,
    /// Holding a driver for its service time.
    InService,
}

/// One in-flight delivery process. Despawned once its timings are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct DeliveryOrder {
    /// Sequential identity assigned by the order generator, starting at 1.
    pub id: u64,
    pub stage: DeliveryStage,
    /// Simulation time when the order was placed.
    pub arrived_at: f64,
    /// Simulation time when a driver was granted; set by the driver-assigned system.
    pub granted_at: Option<f64>,
}

impl DeliveryOrder {
    pub fn new(id: u64, arrived_at: f64) -> Self {
        Self {
            id,
            stage: DeliveryStage::AwaitingDriver,
            arrived_at,
            granted_at: None,
        }
    }
}
