//! Process command implementation
//!
//! The complete ingestion workflow: classify each workbook by file name,
//! ingest it into its session slot, compute summary statistics once all
//! three slots are populated, and optionally re-export normalized copies.

use std::time::Instant;

use colored::*;
use tracing::{debug, error, info, warn};

use super::shared::{ProcessingStats, create_progress_bar, setup_logging};
use crate::app::services::aggregator::aggregate;
use crate::app::services::dataset_store::DatasetStore;
use crate::app::services::ingest::{IngestOptions, ingest_workbook};
use crate::app::services::report_classifier::classify;
use crate::app::services::workbook_writer::write_normalized_workbook;
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::{Config, ExportConfig, ProcessingConfig};
use crate::{Result, StatisticsSummary};

/// Process command runner
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level, args.quiet)?;
    info!("Starting shopmetrics processor");
    debug!("Command line arguments: {:?}", args);

    let config = build_config(&args);
    config.validate()?;

    let options = IngestOptions {
        preprocess: config.processing.preprocess,
    };
    let mut store = DatasetStore::new();
    let mut stats = ProcessingStats::default();

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(args.files.len() as u64, "Ingesting workbooks"));

    for path in &args.files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file_config = classify(&file_name);
        if !file_config.kind.is_known() {
            warn!("File '{}' matched no known report template", file_name);
            eprintln!(
                "{} {}",
                "Skipping unrecognized report:".bright_yellow(),
                file_name
            );
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            continue;
        }

        // The ticket is issued before parsing starts, so a slower earlier
        // upload can never clobber a newer one for the same slot.
        let ticket = store.begin_upload(file_config.kind);

        match ingest_workbook(path, &options).await {
            Ok(outcome) => {
                stats.files_processed += 1;
                stats.records_ingested += outcome.dataset.len();
                if store.commit(ticket, outcome.dataset) {
                    stats.datasets_installed += 1;
                }
            }
            Err(e) => {
                // Parse failures leave the slot unchanged
                error!("Failed to process '{}': {}", file_name, e);
                eprintln!("{} {}: {}", "Failed to process".bright_red(), file_name, e);
                stats.errors_encountered += 1;
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Ingestion complete");
    }

    let summary = aggregate(
        store.overview(),
        store.product_traffic(),
        store.product_sample(),
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_text_summary(summary.as_ref(), &store),
    }

    if config.export.enabled {
        for dataset in store.populated() {
            let path = write_normalized_workbook(dataset, &config.export.output_path)?;
            let size = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            stats.exports.push((name, size));
        }

        if args.format == OutputFormat::Text {
            print_export_summary(&stats);
        }
    }

    stats.processing_time = start_time.elapsed();
    info!(
        "Processed {} files in {:.2}s",
        stats.files_processed,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Assemble configuration from CLI arguments
fn build_config(args: &ProcessArgs) -> Config {
    Config {
        processing: ProcessingConfig {
            preprocess: !args.no_preprocess,
        },
        export: ExportConfig {
            enabled: args.export,
            output_path: args
                .output_path
                .clone()
                .unwrap_or_else(|| ExportConfig::default().output_path),
        },
    }
}

/// Render the summary statistics as colored text
fn print_text_summary(summary: Option<&StatisticsSummary>, store: &DatasetStore) {
    let Some(summary) = summary else {
        let missing: Vec<&str> = [
            ("overview", store.overview().is_none()),
            ("product traffic", store.product_traffic().is_none()),
            ("product sample", store.product_sample().is_none()),
        ]
        .iter()
        .filter_map(|(name, absent)| absent.then_some(*name))
        .collect();

        println!(
            "\n{} missing: {}",
            "No summary yet - report kinds".bright_yellow(),
            missing.join(", ")
        );
        return;
    };

    println!("\n{}", "Summary Statistics".bright_green().bold());

    println!("\n{}", "Overview".bright_cyan().bold());
    println!(
        "  {} {}",
        "Page views:".bright_cyan(),
        summary.overview.page_views.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Product visitors:".bright_cyan(),
        summary
            .overview
            .product_visitors
            .to_string()
            .bright_white()
            .bold()
    );
    println!(
        "  {} {}",
        "Orders:".bright_cyan(),
        summary.overview.orders.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "GMV:".bright_cyan(),
        summary.overview.gmv_display.bright_white().bold()
    );

    println!("\n{}", "Product Traffic".bright_cyan().bold());
    for (label, value) in summary.product_funnel() {
        println!(
            "  {} {}",
            format!("{}:", label).bright_cyan(),
            value.to_string().bright_white().bold()
        );
    }

    println!("\n{}", "Product Sample".bright_cyan().bold());
    println!(
        "  {} {}",
        "Total products:".bright_cyan(),
        summary
            .product_sample
            .total_products
            .to_string()
            .bright_white()
            .bold()
    );
    println!(
        "  {} {}",
        "With orders:".bright_cyan(),
        summary
            .product_sample
            .products_with_orders
            .to_string()
            .bright_white()
            .bold()
    );
    println!(
        "  {} {}",
        "Without orders:".bright_cyan(),
        summary
            .product_sample
            .products_without_orders()
            .to_string()
            .bright_white()
            .bold()
    );
}

/// Render the export results as colored text
fn print_export_summary(stats: &ProcessingStats) {
    println!("\n{}", "Exported Workbooks".bright_green().bold());
    for (name, size) in &stats.exports {
        println!(
            "  {} ({})",
            name.bright_white(),
            ProcessingStats::format_size(*size)
        );
    }
}
