//! `growth` - console front end for the logistic growth core.
//!
//! Usage: `growth run [--scenario NAME | --config FILE] [--r R --k K --p0 P0 --t-max T --dt DT]`

mod app;
mod cli;
mod config;
mod export;
mod report;

use clap::Parser;
use std::io;
use std::process;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Command};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Run(args) => app::execute(&args, &mut out),
        Command::Scenarios => report::write_scenarios(&mut out).map_err(Into::into),
    };

    if let Err(e) = result {
        error!("{e:#}");
        process::exit(1);
    }
}
