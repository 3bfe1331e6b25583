//! Driver pool: a fixed number of interchangeable drivers and a FIFO wait queue.
//!
//! Requests are granted strictly in arrival order. A release with a non-empty
//! queue hands the freed driver straight to the head of the queue, so the busy
//! count does not dip in between.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};

use crate::error::{SimError, SimResult};

/// Result of asking the pool for a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A driver was free and is now held by the requester.
    Granted,
    /// All drivers are busy; the requester waits at this 1-based queue position.
    Queued { position: usize },
}

#[derive(Debug, Clone, Resource)]
pub struct DriverPool {
    capacity: usize,
    busy: usize,
    waiting: VecDeque<Entity>,
}

impl DriverPool {
    /// Create a pool with `capacity` drivers, all idle. Capacity is validated by
    /// [crate::scenario::ScenarioParams::validate] before a pool is built.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "driver pool capacity must be >= 1");
        Self {
            capacity,
            busy: 0,
            waiting: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn busy(&self) -> usize {
        self.busy
    }

    pub fn available(&self) -> usize {
        self.capacity - self.busy
    }

    pub fn queue_length(&self) -> usize {
        self.waiting.len()
    }

    /// Request a driver for `order`.
    pub fn request(&mut self, order: Entity) -> RequestOutcome {
        if self.busy < self.capacity {
            self.busy += 1;
            RequestOutcome::Granted
        } else {
            self.waiting.push_back(order);
            RequestOutcome::Queued {
                position: self.waiting.len(),
            }
        }
    }

    /// Return a driver to the pool.
    ///
    /// Returns the order at the head of the wait queue if the driver was handed
    /// over to it; that order now holds the driver and must be resumed.
    pub fn release(&mut self) -> SimResult<Option<Entity>> {
        if self.busy == 0 {
            return Err(SimError::InvariantViolation(
                "driver released while no driver was busy".to_string(),
            ));
        }
        match self.waiting.pop_front() {
            Some(next) => Ok(Some(next)),
            None => {
                self.busy -= 1;
                Ok(None)
            }
        }
    }
}
