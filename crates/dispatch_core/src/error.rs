//! Error types for scenario setup and simulation runs.

use thiserror::Error;

/// Rejected scenario configuration. Raised before any event is scheduled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("driver pool capacity must be at least 1")]
    NoDrivers,

    #[error("simulation horizon must be a positive finite number, got {0}")]
    NonPositiveHorizon(f64),

    #[error("mean order interval must be a positive finite number, got {0}")]
    NonPositiveOrderInterval(f64),

    #[error("service time minimum must be a positive finite number, got {0}")]
    NonPositiveServiceTime(f64),

    #[error("service time range is inverted: min {min} > max {max}")]
    InvertedServiceRange { min: f64, max: f64 },

    #[error("monitor interval must be a positive finite number, got {0}")]
    NonPositiveMonitorInterval(f64),

    #[error("sweep has no driver pool sizes to evaluate")]
    EmptyDriverCounts,
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Insufficient data: no samples recorded for {metric}")]
    InsufficientData { metric: &'static str },

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Resource '{0}' missing from the world")]
    MissingResource(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
