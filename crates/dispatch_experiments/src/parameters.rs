//! Sweep definitions: a base scenario plus the driver-pool sizes to compare.
//!
//! A [SweepConfig] expands into one [ParameterSet] per pool size. Every set
//! shares the base seed, so scenarios differ only in capacity.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dispatch_core::scenario::ScenarioParams;
use dispatch_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::error::ExperimentResult;

const DEFAULT_DRIVER_COUNTS: [usize; 4] = [2, 3, 4, 5];

/// Pool sizes to evaluate against a shared base scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Label carried into every result, log line and export row of the sweep.
    pub experiment_id: String,
    pub base: ScenarioParams,
    pub driver_counts: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            experiment_id: "driver_sweep".to_string(),
            base: ScenarioParams::default(),
            driver_counts: DEFAULT_DRIVER_COUNTS.to_vec(),
        }
    }
}

impl SweepConfig {
    /// Load a sweep from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> ExperimentResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_experiment_id(mut self, experiment_id: impl Into<String>) -> Self {
        self.experiment_id = experiment_id.into();
        self
    }

    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    pub fn with_driver_counts(mut self, counts: Vec<usize>) -> Self {
        self.driver_counts = counts;
        self
    }

    /// Check the driver list and every generated scenario before anything runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.driver_counts.is_empty() {
            return Err(ConfigError::EmptyDriverCounts);
        }
        self.generate()
            .iter()
            .try_for_each(|set| set.params.validate())
    }

    /// One parameter set per pool size, in configured order.
    pub fn generate(&self) -> Vec<ParameterSet> {
        self.driver_counts
            .iter()
            .enumerate()
            .map(|(run_id, &num_drivers)| {
                ParameterSet::new(
                    self.experiment_id.clone(),
                    run_id,
                    self.base.clone().with_num_drivers(num_drivers),
                )
            })
            .collect()
    }
}

/// A single scenario of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    pub experiment_id: String,
    pub run_id: usize,
    pub params: ScenarioParams,
}

impl ParameterSet {
    pub fn new(experiment_id: String, run_id: usize, params: ScenarioParams) -> Self {
        Self {
            experiment_id,
            run_id,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExperimentError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_sweep_covers_two_to_five_drivers() {
        let sets = SweepConfig::default().generate();
        let drivers: Vec<usize> = sets.iter().map(|s| s.params.num_drivers).collect();
        assert_eq!(drivers, vec![2, 3, 4, 5]);
        assert!(sets.iter().all(|s| s.params.seed == 42));
        let run_ids: Vec<usize> = sets.iter().map(|s| s.run_id).collect();
        assert_eq!(run_ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_driver_list_is_rejected() {
        let config = SweepConfig::default().with_driver_counts(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyDriverCounts));
    }

    #[test]
    fn zero_drivers_in_list_is_rejected() {
        let config = SweepConfig::default().with_driver_counts(vec![3, 0]);
        assert_eq!(config.validate(), Err(ConfigError::NoDrivers));
    }

    #[test]
    fn invalid_base_is_rejected() {
        let config = SweepConfig::default()
            .with_base(ScenarioParams::default().with_service_time(30.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedServiceRange { .. })
        ));
    }

    #[test]
    fn loads_partial_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"driver_counts": [1, 8], "base": {{"seed": 7, "horizon": 120.0}}}}"#
        )
        .unwrap();

        let config = SweepConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.driver_counts, vec![1, 8]);
        assert_eq!(config.base.seed, 7);
        assert_eq!(config.base.horizon, 120.0);
        assert_eq!(config.base.order_interval, 5.0);
        assert_eq!(config.experiment_id, "driver_sweep");
    }

    #[test]
    fn experiment_id_reaches_every_parameter_set() {
        let sets = SweepConfig::default()
            .with_experiment_id("night_shift")
            .generate();
        assert!(sets.iter().all(|s| s.experiment_id == "night_shift"));
    }

    #[test]
    fn unreadable_or_malformed_config_is_reported_by_kind() {
        assert!(matches!(
            SweepConfig::from_json_file("/nonexistent/sweep.json"),
            Err(ExperimentError::Io(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"driver_counts\": [2,").unwrap();
        assert!(matches!(
            SweepConfig::from_json_file(file.path()),
            Err(ExperimentError::Json(_))
        ));
    }
}
