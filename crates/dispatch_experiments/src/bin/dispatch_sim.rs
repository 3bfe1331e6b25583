//! Command-line driver-pool comparison.
//!
//! ```text
//! dispatch_sim --drivers 2,3,4,5 --csv summary.csv --series-csv queue.csv
//! dispatch_sim --config sweep.json --json results.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dispatch_experiments::report::comparison_table;
use dispatch_experiments::{
    export_queue_series_csv, export_summary_csv, export_to_json, run_sweep, SweepConfig,
};

#[derive(Parser, Debug)]
#[command(name = "dispatch_sim", about = "Compare delivery driver pool sizes")]
struct Cli {
    /// Sweep configuration as JSON; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label written into every result row
    #[arg(long)]
    experiment_id: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Simulated time to run each scenario for
    #[arg(long)]
    horizon: Option<f64>,

    /// Mean time between orders
    #[arg(long)]
    interval: Option<f64>,

    #[arg(long)]
    service_min: Option<f64>,

    #[arg(long)]
    service_max: Option<f64>,

    /// Driver pool sizes to compare, e.g. 2,3,4,5
    #[arg(long, value_delimiter = ',')]
    drivers: Option<Vec<usize>>,

    /// Write the summary table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write every queue-length sample as CSV
    #[arg(long)]
    series_csv: Option<PathBuf>,

    /// Write full results as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn sweep_config(&self) -> Result<SweepConfig> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::from_json_file(path)
                .with_context(|| format!("reading sweep config {}", path.display()))?,
            None => SweepConfig::default(),
        };

        if let Some(id) = &self.experiment_id {
            config.experiment_id = id.clone();
        }
        let base = &mut config.base;
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if let Some(horizon) = self.horizon {
            base.horizon = horizon;
        }
        if let Some(interval) = self.interval {
            base.order_interval = interval;
        }
        if let Some(min) = self.service_min {
            base.service_time_min = min;
        }
        if let Some(max) = self.service_max {
            base.service_time_max = max;
        }
        if let Some(drivers) = &self.drivers {
            config.driver_counts = drivers.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.sweep_config()?;
    log::debug!("sweep config: {config:?}");

    let results = run_sweep(&config, !cli.no_progress).context("simulation failed")?;
    print!("{}", comparison_table(&results));

    if let Some(path) = &cli.csv {
        export_summary_csv(&results, path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("summary written to {}", path.display());
    }
    if let Some(path) = &cli.series_csv {
        export_queue_series_csv(&results, path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("queue series written to {}", path.display());
    }
    if let Some(path) = &cli.json {
        export_to_json(&results, path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("results written to {}", path.display());
    }

    Ok(())
}
