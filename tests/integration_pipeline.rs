//! End-to-end integration tests for the report processing pipeline
//!
//! Builds real XLSX workbooks for all three report kinds, runs them through
//! classification, extraction, normalization, and validation, and verifies
//! the derived summary statistics, chart series, and normalized re-export.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use tempfile::TempDir;

use shopmetrics::app::services::aggregator::aggregate;
use shopmetrics::app::services::dataset_store::DatasetStore;
use shopmetrics::app::services::ingest::{IngestOptions, ingest_workbook};
use shopmetrics::app::services::series_builder::{
    CONVERSION_RATE_FIELDS, OVERVIEW_METRIC_FIELDS, ValueScale, build_series,
};
use shopmetrics::app::services::workbook_writer::write_normalized_workbook;
use shopmetrics::app::services::workbook_reader::extract_first_sheet;
use shopmetrics::{CellValue, ReportKind};

/// Write an overview report: four banner rows, header at row 4, newest day
/// first like the real export
fn write_overview_report(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("Overview Report_20240315.xlsx");
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy/mm/dd");
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "TikTok Shop").unwrap();
    sheet.write_string(1, 0, "Business Performance").unwrap();
    sheet.write_string(2, 0, "Store: demo-store").unwrap();

    let headers = ["日期", "页面浏览次数", "商品访客数", "订单数", "商品交易总额(₱)"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(4, col as u16, *header).unwrap();
    }

    // Newest first; the series builder must re-sort ascending
    let day2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    sheet.write_datetime_with_format(5, 0, &day2, &date_format).unwrap();
    sheet.write_number(5, 1, 7.0).unwrap();
    sheet.write_number(5, 2, 3.0).unwrap();
    sheet.write_number(5, 3, 1.0).unwrap();
    sheet.write_string(5, 4, "49.50").unwrap();

    let day1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    sheet.write_datetime_with_format(6, 0, &day1, &date_format).unwrap();
    sheet.write_number(6, 1, 3.0).unwrap();
    sheet.write_number(6, 2, 2.0).unwrap();
    sheet.write_number(6, 3, 1.0).unwrap();
    sheet.write_string(6, 4, "51.00").unwrap();

    workbook.save(&path).unwrap();
    path
}

/// Write a traffic report: two banner rows, header at row 2, percent-string
/// rates and sentinel cells
fn write_traffic_report(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("Product Card Traffic_20240315.xlsx");
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy/mm/dd");
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Product Card Traffic").unwrap();

    let headers = [
        "时间",
        "曝光用户数",
        "点击人数",
        "加车人数",
        "支付人数",
        "曝光到点击转化率",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(2, col as u16, *header).unwrap();
    }

    let day1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    sheet.write_datetime_with_format(3, 0, &day1, &date_format).unwrap();
    sheet.write_number(3, 1, 30.0).unwrap();
    sheet.write_number(3, 2, 12.0).unwrap();
    sheet.write_number(3, 3, 3.0).unwrap();
    sheet.write_number(3, 4, 1.0).unwrap();
    sheet.write_string(3, 5, "40%").unwrap();

    let day2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    sheet.write_datetime_with_format(4, 0, &day2, &date_format).unwrap();
    sheet.write_number(4, 1, 20.0).unwrap();
    sheet.write_number(4, 2, 8.0).unwrap();
    sheet.write_number(4, 3, 2.0).unwrap();
    sheet.write_number(4, 4, 1.0).unwrap();
    sheet.write_string(4, 5, "#N/A").unwrap();

    workbook.save(&path).unwrap();
    path
}

/// Write a sample report: header at row 2, one row per product
fn write_sample_report(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("Products Card List-20240315.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Products Card List").unwrap();

    let headers = ["name", "曝光用户数", "支付人数", "曝光到点击转化率"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(2, col as u16, *header).unwrap();
    }

    sheet.write_string(3, 0, "Widget A").unwrap();
    sheet.write_number(3, 1, 40.0).unwrap();
    sheet.write_number(3, 2, 2.0).unwrap();
    sheet.write_string(3, 3, "12.5%").unwrap();

    sheet.write_string(4, 0, "Widget B").unwrap();
    sheet.write_number(4, 1, 10.0).unwrap();
    sheet.write_number(4, 2, 0.0).unwrap();
    sheet.write_string(4, 3, "NaN").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[tokio::test]
async fn test_full_pipeline_to_summary() {
    let dir = TempDir::new().unwrap();
    let options = IngestOptions::default();
    let mut store = DatasetStore::new();

    for path in [
        write_overview_report(&dir),
        write_traffic_report(&dir),
        write_sample_report(&dir),
    ] {
        let outcome = ingest_workbook(&path, &options).await.unwrap();
        assert!(outcome.config.kind.is_known());
        let ticket = store.begin_upload(outcome.config.kind);
        assert!(store.commit(ticket, outcome.dataset));
    }

    assert!(store.is_complete());

    let summary = aggregate(
        store.overview(),
        store.product_traffic(),
        store.product_sample(),
    )
    .unwrap();

    assert_eq!(summary.overview.page_views, 10.0);
    assert_eq!(summary.overview.product_visitors, 5.0);
    assert_eq!(summary.overview.orders, 2.0);
    assert_eq!(summary.overview.gmv_display, "100.50 ₱");

    assert_eq!(summary.product_traffic.exposed_users, 50.0);
    assert_eq!(summary.product_traffic.clicked_users, 20.0);
    assert_eq!(summary.product_traffic.carted_users, 5.0);
    assert_eq!(summary.product_traffic.paid_users, 2.0);

    assert_eq!(summary.product_sample.total_products, 2);
    assert_eq!(summary.product_sample.products_with_orders, 1);
}

#[tokio::test]
async fn test_summary_absent_until_all_kinds_ingested() {
    let dir = TempDir::new().unwrap();
    let options = IngestOptions::default();
    let mut store = DatasetStore::new();

    let outcome = ingest_workbook(&write_overview_report(&dir), &options)
        .await
        .unwrap();
    let ticket = store.begin_upload(outcome.config.kind);
    store.commit(ticket, outcome.dataset);

    assert!(
        aggregate(
            store.overview(),
            store.product_traffic(),
            store.product_sample(),
        )
        .is_none()
    );
}

#[tokio::test]
async fn test_series_from_ingested_overview() {
    let dir = TempDir::new().unwrap();
    let outcome = ingest_workbook(&write_overview_report(&dir), &IngestOptions::default())
        .await
        .unwrap();

    let series = build_series(
        &outcome.dataset,
        "日期",
        OVERVIEW_METRIC_FIELDS,
        ValueScale::Identity,
    );

    // The workbook lists the newest day first; the series is ascending
    assert_eq!(series.len(), 2);
    assert_eq!(series.points[0].label, "3/1");
    assert_eq!(series.points[1].label, "3/2");
    assert_eq!(series.points[0].values["页面浏览次数"], 3.0);
    assert_eq!(series.points[1].values["页面浏览次数"], 7.0);
}

#[tokio::test]
async fn test_rate_series_normalizes_then_rescales() {
    let dir = TempDir::new().unwrap();
    let outcome = ingest_workbook(&write_traffic_report(&dir), &IngestOptions::default())
        .await
        .unwrap();

    // "40%" was normalized to 0.4 at ingestion
    assert_eq!(
        outcome.dataset.records[0].get("曝光到点击转化率"),
        Some(&CellValue::Number(0.4))
    );

    let rates = build_series(
        &outcome.dataset,
        "时间",
        CONVERSION_RATE_FIELDS,
        ValueScale::Percent,
    );

    // ...and rescaled x100 for display; the sentinel day reads 0
    assert_eq!(rates.points[0].values["曝光到点击"], 40.0);
    assert_eq!(rates.points[1].values["曝光到点击"], 0.0);
}

#[tokio::test]
async fn test_no_preprocess_keeps_raw_values() {
    let dir = TempDir::new().unwrap();
    let options = IngestOptions { preprocess: false };
    let outcome = ingest_workbook(&write_traffic_report(&dir), &options)
        .await
        .unwrap();

    assert_eq!(
        outcome.dataset.records[0].get("曝光到点击转化率"),
        Some(&CellValue::Text("40%".to_string()))
    );
}

#[tokio::test]
async fn test_normalized_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let outcome = ingest_workbook(&write_sample_report(&dir), &IngestOptions::default())
        .await
        .unwrap();
    assert_eq!(outcome.config.kind, ReportKind::ProductSample);

    let out_dir = TempDir::new().unwrap();
    let exported = write_normalized_workbook(&outcome.dataset, out_dir.path()).unwrap();
    assert_eq!(exported.file_name().unwrap(), "products.xlsx");

    let bytes = std::fs::read(&exported).unwrap();
    let (table, _) = extract_first_sheet(&bytes, 0, "products.xlsx").unwrap();

    assert_eq!(
        table.columns,
        vec!["name", "曝光用户数", "支付人数", "曝光到点击转化率"]
    );
    assert_eq!(table.rows.len(), 2);
    // The sentinel rate was normalized to 0 before export
    assert_eq!(
        table.rows[1].get("曝光到点击转化率"),
        Some(&shopmetrics::RawCell::Number(0.0))
    );
}

#[tokio::test]
async fn test_corrupt_workbook_fails_without_touching_slots() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("Overview Report_20240101.xlsx");
    std::fs::write(&bad_path, b"definitely not a workbook").unwrap();

    let mut store = DatasetStore::new();
    let ticket = store.begin_upload(ReportKind::Overview);

    let result = ingest_workbook(&bad_path, &IngestOptions::default()).await;
    assert!(result.is_err());

    // The failed upload never commits; the slot stays empty
    let _ = ticket;
    assert!(store.overview().is_none());
}
