//! Command implementations for the shopmetrics CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented
//! in its own module:
//! - `process`: ingest report workbooks and compute summary statistics
//! - `series`: derive chart-ready series from one workbook
//! - `inspect`: show workbook shape and leading rows

pub mod inspect;
pub mod process;
pub mod series;
pub mod shared;

pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Series(series_args)) => series::run_series(series_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Ok(ProcessingStats::default()),
    }
}
