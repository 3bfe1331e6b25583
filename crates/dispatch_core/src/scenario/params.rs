use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reference scenario: one 8-hour shift in minutes, an order every 5 minutes on
/// average, deliveries taking 15 to 25 minutes.
const DEFAULT_SEED: u64 = 42;
const DEFAULT_HORIZON: f64 = 480.0;
const DEFAULT_ORDER_INTERVAL: f64 = 5.0;
const DEFAULT_SERVICE_TIME_MIN: f64 = 15.0;
const DEFAULT_SERVICE_TIME_MAX: f64 = 25.0;
const DEFAULT_MONITOR_INTERVAL: f64 = 5.0;
const DEFAULT_NUM_DRIVERS: usize = 3;

/// Simulation horizon. The runner processes every event with a timestamp at or
/// before this time and leaves the rest unprocessed.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationHorizon(pub f64);

/// Uniform service duration range for deliveries.
#[derive(Debug, Clone, Copy, Resource)]
pub struct ServiceTimeConfig {
    pub min: f64,
    pub max: f64,
}

/// Sampling period of the queue monitor.
#[derive(Debug, Clone, Copy, Resource)]
pub struct QueueMonitorConfig {
    pub interval: f64,
}

impl Default for QueueMonitorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_MONITOR_INTERVAL,
        }
    }
}

/// Parameters for building a single-scenario simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    /// Seed for the run's single random stream.
    pub seed: u64,
    /// Simulated time units to run for.
    pub horizon: f64,
    /// Mean of the exponential gap between consecutive orders.
    pub order_interval: f64,
    pub service_time_min: f64,
    pub service_time_max: f64,
    /// Driver pool capacity.
    pub num_drivers: usize,
    pub monitor_interval: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            horizon: DEFAULT_HORIZON,
            order_interval: DEFAULT_ORDER_INTERVAL,
            service_time_min: DEFAULT_SERVICE_TIME_MIN,
            service_time_max: DEFAULT_SERVICE_TIME_MAX,
            num_drivers: DEFAULT_NUM_DRIVERS,
            monitor_interval: DEFAULT_MONITOR_INTERVAL,
        }
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_order_interval(mut self, interval: f64) -> Self {
        self.order_interval = interval;
        self
    }

    /// Service duration range: uniform in `[min, max]`.
    pub fn with_service_time(mut self, min: f64, max: f64) -> Self {
        self.service_time_min = min;
        self.service_time_max = max;
        self
    }

    pub fn with_num_drivers(mut self, num_drivers: usize) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_monitor_interval(mut self, interval: f64) -> Self {
        self.monitor_interval = interval;
        self
    }

    /// Reject configurations the engine cannot run. Values are never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_drivers < 1 {
            return Err(ConfigError::NoDrivers);
        }
        if !positive_finite(self.horizon) {
            return Err(ConfigError::NonPositiveHorizon(self.horizon));
        }
        if !positive_finite(self.order_interval) {
            return Err(ConfigError::NonPositiveOrderInterval(self.order_interval));
        }
        if !positive_finite(self.service_time_min) {
            return Err(ConfigError::NonPositiveServiceTime(self.service_time_min));
        }
        if !self.service_time_max.is_finite() || self.service_time_min > self.service_time_max {
            return Err(ConfigError::InvertedServiceRange {
                min: self.service_time_min,
                max: self.service_time_max,
            });
        }
        if !positive_finite(self.monitor_interval) {
            return Err(ConfigError::NonPositiveMonitorInterval(
                self.monitor_interval,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert_eq!(ScenarioParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_each_invalid_field() {
        let base = ScenarioParams::default();
        assert_eq!(
            base.clone().with_num_drivers(0).validate(),
            Err(ConfigError::NoDrivers)
        );
        assert_eq!(
            base.clone().with_horizon(0.0).validate(),
            Err(ConfigError::NonPositiveHorizon(0.0))
        );
        assert!(matches!(
            base.clone().with_horizon(f64::NAN).validate(),
            Err(ConfigError::NonPositiveHorizon(_))
        ));
        assert_eq!(
            base.clone().with_order_interval(-1.0).validate(),
            Err(ConfigError::NonPositiveOrderInterval(-1.0))
        );
        assert_eq!(
            base.clone().with_service_time(25.0, 15.0).validate(),
            Err(ConfigError::InvertedServiceRange {
                min: 25.0,
                max: 15.0
            })
        );
        assert_eq!(
            base.clone().with_service_time(0.0, 15.0).validate(),
            Err(ConfigError::NonPositiveServiceTime(0.0))
        );
        assert_eq!(
            base.with_monitor_interval(0.0).validate(),
            Err(ConfigError::NonPositiveMonitorInterval(0.0))
        );
    }

    #[test]
    fn degenerate_service_range_is_allowed() {
        let params = ScenarioParams::default().with_service_time(20.0, 20.0);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let params: ScenarioParams =
            serde_json::from_str(r#"{"num_drivers": 5, "horizon": 120.0}"#).expect("json");
        assert_eq!(params.num_drivers, 5);
        assert_eq!(params.horizon, 120.0);
        assert_eq!(params.seed, DEFAULT_SEED);
        assert_eq!(params.order_interval, DEFAULT_ORDER_INTERVAL);
    }
}
