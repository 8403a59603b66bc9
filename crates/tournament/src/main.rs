//! Madness CLI
//!
//! Simulate the regional brackets and the final four.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tournament::{tournament_rng, TournamentConfig, TournamentData, TournamentRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "madness", about = "Single-elimination bracket tournament simulator")]
struct Cli {
    /// TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with matchups.json and the region files
    #[arg(short, long)]
    datasets: Option<PathBuf>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write results as JSON to this path
    #[arg(short, long)]
    results: Option<PathBuf>,

    /// Print a summary report when the run is done
    #[arg(long)]
    report: bool,

    /// Only print the final champion
    #[arg(short, long)]
    quiet: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<TournamentConfig> {
    let config = match &cli.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TournamentConfig::default(),
    };
    Ok(config.with_overrides(cli.datasets.clone(), cli.seed)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let started_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if !cli.quiet {
        println!("Madness Model started at {}\n", started_at);
    }

    let config = load_config(&cli)?;
    let data = TournamentData::load(&config).context("Failed to load tournament data")?;

    info!(
        datasets = %config.datasets_dir.display(),
        regions = data.regions.len(),
        seed = ?config.seed,
        "starting tournament"
    );

    let mut rng = tournament_rng(config.seed);
    let runner = TournamentRunner::new(config, !cli.quiet);
    let results = runner
        .run(&data, &mut rng, &started_at)
        .context("Tournament simulation failed")?;

    if cli.quiet {
        if let Some(champion) = results.champion() {
            println!("{}", champion.name);
        }
    }

    if let Some(path) = &cli.results {
        results
            .save(path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    if cli.report {
        println!();
        results.print_report();
    }

    Ok(())
}
