use clap::{Args, Parser, Subcommand};
use growth_core::Scenario;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "growth")]
#[command(about = "Simulate logistic population growth (dP/dt = r*P*(1-P/K)) with RK4")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the model and run the simulation
    Run(RunArgs),
    /// List the preset scenarios and exit
    Scenarios,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Preset scenario (bacteria, city, fish)
    #[arg(long, conflicts_with = "config")]
    pub scenario: Option<Scenario>,

    /// TOML file with r, k, p0, t_max and dt
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Intrinsic growth rate
    #[arg(long)]
    pub r: Option<f64>,

    /// Carrying capacity
    #[arg(long)]
    pub k: Option<f64>,

    /// Initial population
    #[arg(long)]
    pub p0: Option<f64>,

    /// Maximum simulated time
    #[arg(long)]
    pub t_max: Option<f64>,

    /// Integration step size
    #[arg(long)]
    pub dt: Option<f64>,

    /// Print every Nth step in the table
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: u64,

    /// Add a |P - P_exact| column against the closed-form solution
    #[arg(long)]
    pub exact: bool,

    /// Where to write every computed step as CSV
    #[arg(long, default_value = "population_data.csv")]
    pub csv: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,
}
