//! Inspect command implementation
//!
//! Read-only workbook preview: sheet names, dimensions, and the leading
//! rows of the first sheet, before any classification or normalization.

use colored::*;
use tracing::debug;

use super::shared::{ProcessingStats, setup_logging};
use crate::app::services::report_classifier::classify;
use crate::app::services::workbook_reader::describe_workbook;
use crate::cli::args::InspectArgs;
use crate::{Error, Result};

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    setup_logging(&args.log_level, true)?;
    debug!("Inspect command arguments: {:?}", args);

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(|e| Error::io(format!("Failed to read file {}", args.file.display()), e))?;

    let summary = describe_workbook(&bytes, &file_name, args.rows)?;
    let config = classify(&file_name);

    println!("{} {}", "Workbook:".bright_cyan(), file_name.bright_white().bold());
    println!(
        "{} {} (header offset {})",
        "Classified as:".bright_cyan(),
        config.kind.label().bright_white().bold(),
        config.header_row_offset
    );

    println!("\n{}", "Sheets".bright_green().bold());
    for sheet in &summary.sheets {
        println!(
            "  {} {} rows x {} columns",
            format!("{}:", sheet.name).bright_cyan(),
            sheet.rows,
            sheet.cols
        );
    }

    if !summary.preview.is_empty() {
        println!("\n{}", "Preview (first sheet)".bright_green().bold());
        for (i, row) in summary.preview.iter().enumerate() {
            println!("  {:>3}  {}", i + 1, row.join(" | "));
        }
    }

    Ok(ProcessingStats {
        files_processed: 1,
        ..Default::default()
    })
}
