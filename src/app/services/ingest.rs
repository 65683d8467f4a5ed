//! Ingestion orchestration
//!
//! Runs one workbook through the pipeline: classify by file name, read the
//! bytes (the single asynchronous suspension point), extract the first
//! sheet at the classifier-selected header offset, normalize, and
//! validate. Parsing runs to completion once started; there is no timeout
//! or abort path.

use std::path::Path;

use tracing::info;

use super::preprocessor::{normalize_table, passthrough_table, validate_dataset};
use super::report_classifier::{FileConfig, classify};
use super::workbook_reader::{ExtractStats, extract_first_sheet};
use crate::app::models::Dataset;
use crate::{Error, Result};

/// Options threaded explicitly through ingestion
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Apply full cell normalization; when false, values are carried
    /// verbatim and only the NaN validator runs
    pub preprocess: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { preprocess: true }
    }
}

/// Result of ingesting one workbook
#[derive(Debug)]
pub struct IngestOutcome {
    /// Classification derived from the file name
    pub config: FileConfig,

    /// Validated dataset ready for a store slot
    pub dataset: Dataset,

    /// Extraction statistics
    pub stats: ExtractStats,
}

/// Ingest one workbook file into a validated dataset
pub async fn ingest_workbook(path: &Path, options: &IngestOptions) -> Result<IngestOutcome> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let config = classify(&file_name);
    info!(
        "Ingesting '{}' as {} report (header offset {})",
        file_name,
        config.kind.label(),
        config.header_row_offset
    );

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    let (table, stats) = extract_first_sheet(&bytes, config.header_row_offset, &file_name)?;

    let dataset = if options.preprocess {
        normalize_table(table, config.kind)
    } else {
        passthrough_table(table, config.kind)
    };
    let dataset = validate_dataset(dataset);

    info!(
        "Ingested '{}': {} records ({})",
        file_name,
        dataset.len(),
        stats.summary()
    );

    Ok(IngestOutcome {
        config,
        dataset,
        stats,
    })
}
