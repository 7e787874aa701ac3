//! Bowling CLI - scores a ten-pin bowling game described in a text file.

mod config;
mod output;
mod telemetry;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use bowling::{DomainError, Scorer, TenPinScorer};
use clap::Parser;
use config::{Args, CliConfig};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("ERROR: {} is not found!", .path.display())]
    NotFound { path: PathBuf },
    #[error("ERROR: cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("ERROR: Failed to parse scores: {}", .0.detail())]
    Parse(#[from] DomainError),
    #[error("ERROR: cannot render scores: {0}")]
    Render(#[from] serde_json::Error),
}

fn main() {
    // clap exits with status 2 on argument errors
    let config = CliConfig::from_args(Args::parse());
    telemetry::init_tracing(&config);

    match run(&config) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            error!(error = ?e, "scoring failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<String, CliError> {
    info!(input = %config.input.display(), "using input file");

    let file = File::open(&config.input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound {
            path: config.input.clone(),
        },
        _ => CliError::Open {
            path: config.input.clone(),
            source,
        },
    })?;

    let mut scorer = TenPinScorer::new();
    scorer.init(file)?;
    output::render(&scorer, config)
}
