//! Series command implementation
//!
//! Ingests a single workbook and emits the chart-ready series appropriate
//! to its report kind as JSON: daily metric series for overview reports,
//! funnel count and conversion-rate series for traffic reports, and
//! per-product breakdowns for sample reports.

use serde_json::json;
use tracing::debug;

use super::shared::{ProcessingStats, setup_logging};
use crate::app::models::ReportKind;
use crate::app::services::ingest::{IngestOptions, ingest_workbook};
use crate::app::services::series_builder::{
    CONVERSION_RATE_FIELDS, OVERVIEW_METRIC_FIELDS, SAMPLE_COUNT_FIELDS, SAMPLE_RATE_FIELDS,
    TRAFFIC_COUNT_FIELDS, ValueScale, build_breakdown, build_series,
};
use crate::cli::args::SeriesArgs;
use crate::constants::columns;
use crate::{Error, Result};

/// Series command runner
pub async fn run_series(args: SeriesArgs) -> Result<ProcessingStats> {
    setup_logging(&args.log_level, true)?;
    debug!("Series command arguments: {:?}", args);

    let outcome = ingest_workbook(&args.file, &IngestOptions::default()).await?;
    let dataset = &outcome.dataset;

    let payload = match outcome.config.kind {
        ReportKind::Overview => json!({
            "kind": "overview",
            "metrics": build_series(
                dataset,
                columns::DATE,
                OVERVIEW_METRIC_FIELDS,
                ValueScale::Identity,
            ),
        }),
        ReportKind::ProductTraffic => json!({
            "kind": "productTraffic",
            "counts": build_series(
                dataset,
                columns::TIME,
                TRAFFIC_COUNT_FIELDS,
                ValueScale::Identity,
            ),
            "rates": build_series(
                dataset,
                columns::TIME,
                CONVERSION_RATE_FIELDS,
                ValueScale::Percent,
            ),
        }),
        ReportKind::ProductSample => json!({
            "kind": "productSample",
            "counts": build_breakdown(
                dataset,
                columns::PRODUCT_NAME,
                SAMPLE_COUNT_FIELDS,
                ValueScale::Identity,
            ),
            "rates": build_breakdown(
                dataset,
                columns::PRODUCT_NAME,
                SAMPLE_RATE_FIELDS,
                ValueScale::Percent,
            ),
        }),
        ReportKind::Unknown => {
            return Err(Error::configuration(format!(
                "Cannot derive series: '{}' matched no known report template",
                args.file.display()
            )));
        }
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", serde_json::to_string(&payload)?);
    }

    Ok(ProcessingStats {
        files_processed: 1,
        records_ingested: dataset.len(),
        ..Default::default()
    })
}
