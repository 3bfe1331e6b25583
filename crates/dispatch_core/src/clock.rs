use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};

/// Which process an event resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Starts the order generator and the queue monitor.
    SimulationStarted,
    /// The order generator wakes up: a new order arrives.
    OrderArrival,
    /// A driver was granted to the subject order.
    DriverAssigned,
    /// The subject order finished its service time.
    DeliveryCompleted,
    /// The queue monitor takes a sample.
    MonitorSample,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub timestamp: f64,
    pub kind: EventKind,
    /// The delivery entity this event belongs to, if any.
    pub subject: Option<Entity>,
}

/// The event currently being processed. Inserted by the runner before each schedule run.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug)]
struct Pending {
    event: Event,
    seq: u64,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by timestamp, then insertion order.
        other
            .event
            .timestamp
            .total_cmp(&self.event.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Simulated time plus the set of pending events.
///
/// Time is a non-negative real number in abstract time units (minutes in the
/// reference scenario). Events at the same timestamp pop in the order they were
/// scheduled.
#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: f64,
    next_seq: u64,
    events: BinaryHeap<Pending>,
}

impl SimulationClock {
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn schedule(&mut self, event: Event) {
        debug_assert!(
            event.timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        debug_assert!(event.timestamp.is_finite(), "event timestamp must be finite");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Pending { event, seq });
    }

    pub fn schedule_at(&mut self, timestamp: f64, kind: EventKind, subject: Option<Entity>) {
        self.schedule(Event {
            timestamp,
            kind,
            subject,
        });
    }

    /// Schedule `kind` to fire `delay` time units from now.
    pub fn schedule_in(&mut self, delay: f64, kind: EventKind, subject: Option<Entity>) {
        debug_assert!(delay >= 0.0, "delay must be non-negative");
        self.schedule_at(self.now + delay, kind, subject);
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let pending = self.events.pop()?;
        self.now = pending.event.timestamp;
        Some(pending.event)
    }

    pub fn next_event_time(&self) -> Option<f64> {
        self.events.peek().map(|p| p.event.timestamp)
    }

    /// Number of events still waiting to fire.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pops_events_in_time_order() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(10.0, EventKind::OrderArrival, None);
        clock.schedule_at(5.5, EventKind::OrderArrival, None);
        clock.schedule_at(20.0, EventKind::MonitorSample, None);

        let first = clock.pop_next().expect("first event");
        assert_eq!(first.timestamp, 5.5);
        assert_eq!(clock.now(), 5.5);

        let second = clock.pop_next().expect("second event");
        assert_eq!(second.timestamp, 10.0);
        assert_eq!(clock.now(), 10.0);

        let third = clock.pop_next().expect("third event");
        assert_eq!(third.timestamp, 20.0);
        assert_eq!(third.kind, EventKind::MonitorSample);

        assert!(clock.pop_next().is_none());
        assert!(clock.is_empty());
    }

    #[test]
    fn simultaneous_events_pop_in_insertion_order() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(3.0, EventKind::MonitorSample, None);
        clock.schedule_at(3.0, EventKind::OrderArrival, None);
        clock.schedule_at(1.0, EventKind::DeliveryCompleted, None);
        clock.schedule_at(3.0, EventKind::DriverAssigned, None);

        let kinds: Vec<EventKind> = std::iter::from_fn(|| clock.pop_next())
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::DeliveryCompleted,
                EventKind::MonitorSample,
                EventKind::OrderArrival,
                EventKind::DriverAssigned,
            ]
        );
    }

    #[test]
    fn schedule_in_is_relative_to_now() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(4.0, EventKind::OrderArrival, None);
        clock.pop_next().expect("event");

        clock.schedule_in(2.5, EventKind::MonitorSample, None);
        clock.schedule_in(0.0, EventKind::DriverAssigned, None);
        assert_eq!(clock.pending(), 2);
        assert_eq!(clock.next_event_time(), Some(4.0));

        let zero_delay = clock.pop_next().expect("zero-delay event");
        assert_eq!(zero_delay.kind, EventKind::DriverAssigned);
        assert_eq!(clock.now(), 4.0);
        let later = clock.pop_next().expect("delayed event");
        assert_eq!(later.timestamp, 6.5);
    }
}
