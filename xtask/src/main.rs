use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the delivery dispatch simulation workspace",
    long_about = "A unified CLI for running scenarios, driver sweeps, benchmarks,\n\
                  and CI checks in the delivery dispatch simulation workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference scenario (seed 42, 3 drivers, 480 minutes)
    Run,
    /// Compare driver pool sizes with the dispatch_sim CLI
    Sweep {
        /// Comma-separated pool sizes
        #[arg(long, default_value = "2,3,4,5")]
        drivers: String,
        /// Optional summary CSV output path
        #[arg(long)]
        csv: Option<String>,
    },
    /// Run Criterion benchmarks
    Bench {
        /// Store this run under a named Criterion baseline
        #[arg(long, conflicts_with = "baseline")]
        save_baseline: Option<String>,
        /// Compare this run against a previously saved baseline
        #[arg(long)]
        baseline: Option<String>,
    },
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run load tests (ignored tests in dispatch_core)
    LoadTest,
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run examples
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn bench(extra: &[&str]) {
    let mut args = vec!["bench", "--package", "dispatch_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test dispatch_core");
    run_cargo(&["test", "-p", "dispatch_core"]);

    step("Test dispatch_experiments");
    run_cargo(&["test", "-p", "dispatch_experiments"]);
}

fn ci_examples() {
    step("Run scenario_run (reference scenario)");
    run_cargo(&[
        "run",
        "-p",
        "dispatch_core",
        "--example",
        "scenario_run",
        "--release",
    ]);

    step("Run driver_sweep");
    run_cargo(&[
        "run",
        "-p",
        "dispatch_experiments",
        "--example",
        "driver_sweep",
        "--release",
    ]);
}

fn ci_bench() {
    step("Run benchmarks");
    bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_cargo(&[
                "run",
                "-p",
                "dispatch_core",
                "--example",
                "scenario_run",
                "--release",
            ]);
        }
        Commands::Sweep { drivers, csv } => {
            let mut args = vec![
                "run",
                "-p",
                "dispatch_experiments",
                "--bin",
                "dispatch_sim",
                "--release",
                "--",
                "--drivers",
                drivers.as_str(),
            ];
            if let Some(path) = csv.as_deref() {
                args.extend_from_slice(&["--csv", path]);
            }
            run_cargo(&args);
        }
        Commands::Bench {
            save_baseline,
            baseline,
        } => {
            let mut extra = Vec::new();
            if let Some(name) = save_baseline.as_deref() {
                extra.extend_from_slice(&["--save-baseline", name]);
            }
            if let Some(name) = baseline.as_deref() {
                extra.extend_from_slice(&["--baseline", name]);
            }
            bench(&extra);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::LoadTest => {
            run_cargo(&[
                "test",
                "-p",
                "dispatch_core",
                "--test",
                "load_tests",
                "--",
                "--ignored",
            ]);
        }
    }
}
