use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::info;

use cbc_benchmarks::algorithms::Algorithm;
use cbc_benchmarks::config::BenchConfig;
use cbc_benchmarks::{data, report, runner, Result};

#[derive(Parser)]
struct Args {
    /// Timed runs per (algorithm, file, operation) triple.
    #[arg(long)]
    runs: Option<usize>,

    /// Directory holding the generated test files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the CSV and summary reports are written to.
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Report throughput in decimal MB/s (10^6) instead of MiB/s (2^20).
    #[arg(long)]
    decimal_mb: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let mut config = BenchConfig::load()?;
    if let Some(runs) = args.runs {
        config.runs_per_test = runs;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(results_dir) = args.results_dir {
        config.results_dir = results_dir;
    }
    if args.decimal_mb {
        config.mib_divisor = 1_000_000.0;
    }
    config.validate()?;

    let unit = if args.decimal_mb { "MB/s" } else { "MiB/s" };

    info!("Starting CBC cipher benchmarks...");
    data::ensure_data_files(&config)?;
    let files = data::load_test_files(&config)?;

    let rows = runner::run(
        &Algorithm::ALL,
        &files,
        config.runs_per_test,
        config.mib_divisor,
    )?;

    std::fs::create_dir_all(&config.results_dir)?;
    let csv_path = config.results_dir.join("benchmark_results.csv");
    let summary_path = config.results_dir.join("benchmark_summary.txt");
    report::write_csv(&rows, &csv_path)?;
    report::write_summary(&rows, &Algorithm::ALL, unit, &summary_path)?;

    println!("\nResults saved to:");
    println!("- {}", csv_path.display());
    println!("- {}", summary_path.display());

    println!("\nThroughput ({}) - summary:\n", unit);
    println!("{}", report::render_pivot(&rows, &Algorithm::ALL));

    Ok(())
}
