//! Order generator state: hands out sequential order identities and owns the
//! mean inter-arrival gap of the Poisson arrival process.
//!
//! The generator never stops by itself. It reschedules its next arrival on every
//! wake-up and is cut off only by the simulation horizon.

use bevy_ecs::prelude::Resource;

use crate::distributions::RandomStream;

#[derive(Debug, Clone, Resource)]
pub struct OrderGenerator {
    mean_interval: f64,
    generated: u64,
}

impl OrderGenerator {
    pub fn new(mean_interval: f64) -> Self {
        Self {
            mean_interval,
            generated: 0,
        }
    }

    /// Identity for the next order, starting at 1.
    pub fn next_order_id(&mut self) -> u64 {
        self.generated += 1;
        self.generated
    }

    /// Draw the gap until the next order arrives.
    pub fn sample_gap(&self, stream: &mut RandomStream) -> f64 {
        stream.exponential(self.mean_interval)
    }
}
