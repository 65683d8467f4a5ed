//! Test utilities for aggregation testing

use crate::app::models::{CellValue, Dataset, Record, ReportKind};


/// Build a dataset from (column, value) rows, with column order taken from
/// the first row
pub fn dataset_from_rows(kind: ReportKind, rows: Vec<Vec<(&str, CellValue)>>) -> Dataset {
    let columns = rows
        .first()
        .map(|row| row.iter().map(|(name, _)| name.to_string()).collect())
        .unwrap_or_default();

    let mut dataset = Dataset::new(kind, columns);
    for row in rows {
        let mut record = Record::new();
        for (name, value) in row {
            record.insert(name, value);
        }
        dataset.records.push(record);
    }
    dataset
}

/// Overview dataset matching the documented aggregation example
pub fn example_overview() -> Dataset {
    dataset_from_rows(
        ReportKind::Overview,
        vec![vec![
            ("页面浏览次数", CellValue::Number(10.0)),
            ("商品访客数", CellValue::Number(5.0)),
            ("订单数", CellValue::Number(2.0)),
            ("商品交易总额(₱)", CellValue::Text("100.50".to_string())),
        ]],
    )
}

/// Traffic dataset matching the documented aggregation example
pub fn example_traffic() -> Dataset {
    dataset_from_rows(
        ReportKind::ProductTraffic,
        vec![vec![
            ("曝光用户数", CellValue::Number(50.0)),
            ("点击人数", CellValue::Number(20.0)),
            ("加车人数", CellValue::Number(5.0)),
            ("支付人数", CellValue::Number(2.0)),
        ]],
    )
}

/// Sample dataset matching the documented aggregation example
pub fn example_sample() -> Dataset {
    dataset_from_rows(
        ReportKind::ProductSample,
        vec![vec![
            ("name", CellValue::Text("Widget A".to_string())),
            ("支付人数", CellValue::Number(1.0)),
        ]],
    )
}
