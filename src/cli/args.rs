//! Command-line argument definitions for shopmetrics
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the shopmetrics report processor
///
/// Normalizes exported TikTok Shop performance spreadsheets and derives
/// aggregate metrics and chart-ready series from them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shopmetrics",
    version,
    about = "Normalize TikTok Shop report spreadsheets and derive aggregate metrics",
    long_about = "Processes exported TikTok Shop performance spreadsheets (overview, product \
                  card traffic, and products card list reports), normalizes their heterogeneous \
                  cell content into a consistent form, and derives summary statistics and \
                  date-ordered series for charting. Report files are recognized by file name."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for shopmetrics
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest report workbooks and compute summary statistics (main command)
    Process(ProcessArgs),
    /// Derive chart-ready series from a single report workbook
    Series(SeriesArgs),
    /// Show sheet names, dimensions, and leading rows of a workbook
    Inspect(InspectArgs),
}

/// Summary output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// JSON for downstream tooling
    Json,
}

/// Arguments for the process command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Report workbook files to ingest
    ///
    /// Each file is classified by name: "overview"/"business performance"
    /// files fill the overview slot, "product card traffic" files the
    /// traffic slot, and "products card list" files the sample slot.
    /// Unrecognized files are reported and skipped.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Store raw parsed values without cell normalization
    ///
    /// Sentinel, percent, and date coercion is skipped; only the NaN
    /// validator runs. Metric access then coerces text fields on the fly.
    #[arg(long = "no-preprocess")]
    pub no_preprocess: bool,

    /// Write normalized copies of ingested datasets as <canonical>.xlsx
    #[arg(long = "export")]
    pub export: bool,

    /// Output directory for exported workbooks
    ///
    /// Defaults to ./output. Created if it does not exist.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Summary output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl ProcessArgs {
    /// Whether progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    /// Report workbook file, classified by file name
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Workbook file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of leading rows of the first sheet to preview
    #[arg(long = "rows", value_name = "N", default_value_t = crate::constants::DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
