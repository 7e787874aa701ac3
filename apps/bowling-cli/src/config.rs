//! Command-line and environment configuration.

use std::env;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Environment variable holding the log filter when `--verbose` is absent.
pub const LOG_ENV: &str = "BOWLING_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bowling")]
#[command(about = "Score a ten-pin bowling game from a text file")]
pub struct Args {
    /// Input file: player count, player names, then score lines
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include the running total after each frame
    #[arg(long)]
    pub frames: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub frames: bool,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn from_args(args: Args) -> Self {
        let env_filter = env::var(LOG_ENV)
            .or_else(|_| env::var("RUST_LOG"))
            .ok();
        Self::resolve(args, env_filter)
    }

    // Precedence: --verbose, then the environment, then the default.
    fn resolve(args: Args, env_filter: Option<String>) -> Self {
        let log_filter = if args.verbose {
            "debug".to_string()
        } else {
            env_filter
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        Self {
            input: args.input,
            format: args.format,
            frames: args.frames,
            log_filter,
            log_format: args.log_format,
        }
    }
}
