//! Scenario runner and reporting for the delivery dispatch simulation.
//!
//! Runs one scenario per driver-pool size against a shared base configuration,
//! reduces each run to a [ScenarioResult], and exports the results.
//!
//! # Quick Start
//!
//! ```no_run
//! use dispatch_experiments::{export_summary_csv, run_sweep, SweepConfig};
//!
//! let config = SweepConfig::default().with_driver_counts(vec![2, 3, 4, 5]);
//! let results = run_sweep(&config, true).unwrap();
//! for result in &results {
//!     println!("{} drivers: avg wait {:.2}", result.num_drivers, result.avg_wait);
//! }
//! export_summary_csv(&results, "summary.csv").unwrap();
//! ```
//!
//! # Modules
//!
//! - [`parameters`]: sweep definition and JSON loading
//! - [`runner`]: sequential scenario execution on a reused world
//! - [`metrics`]: summary statistics from a finished run
//! - [`report`]: comparison table for the terminal
//! - [`export`]: CSV and JSON output
//! - [`error`]: failures from config loading and exports

pub mod error;
pub mod export;
pub mod metrics;
pub mod parameters;
pub mod report;
pub mod runner;

pub use error::{ExperimentError, ExperimentResult};
pub use export::{export_queue_series_csv, export_summary_csv, export_to_json};
pub use metrics::ScenarioResult;
pub use parameters::{ParameterSet, SweepConfig};
pub use runner::{run_sweep, ScenarioRunner};
