pub mod delivery_completed;
pub mod driver_assigned;
pub mod order_arrival;
pub mod queue_monitor;
pub mod simulation_started;
