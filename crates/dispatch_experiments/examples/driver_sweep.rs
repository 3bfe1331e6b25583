//! Example: compare pool sizes on a busier shift than the reference scenario.
//!
//! Orders arrive every 3 minutes on average; the sweep shows where the queue
//! stops growing.

use dispatch_core::scenario::ScenarioParams;
use dispatch_experiments::report::comparison_table;
use dispatch_experiments::{export_summary_csv, run_sweep, SweepConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SweepConfig::default()
        .with_base(ScenarioParams::default().with_order_interval(3.0))
        .with_driver_counts(vec![4, 5, 6, 7, 8, 9]);

    let results = run_sweep(&config, true)?;
    print!("{}", comparison_table(&results));

    let stable = results
        .iter()
        .find(|r| !r.backlog_growing())
        .map(|r| r.num_drivers);
    match stable {
        Some(drivers) => println!("\nSmallest pool without a growing backlog: {drivers}"),
        None => println!("\nEvery pool size ends with a growing backlog"),
    }

    export_summary_csv(&results, "driver_sweep_summary.csv")?;
    println!("Summary written to driver_sweep_summary.csv");
    Ok(())
}
