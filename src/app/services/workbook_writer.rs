//! Normalized workbook re-export
//!
//! Serializes an already-normalized dataset back to spreadsheet form under
//! its canonical file name (`total.xlsx`, `producttotal.xlsx`,
//! `products.xlsx`). Dates are written with a `yyyy-mm-dd` number format
//! and column widths scale with header length.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::app::models::{CellValue, Dataset};
use crate::constants::{EXPORT_DATE_FORMAT, EXPORT_MIN_COLUMN_WIDTH, EXPORT_WIDTH_PER_CHAR};
use crate::{Error, Result};

/// Write a normalized dataset to `<canonical>.xlsx` in `output_dir`.
///
/// Returns the path of the written workbook.
pub fn write_normalized_workbook(dataset: &Dataset, output_dir: &Path) -> Result<PathBuf> {
    let file_name = format!("{}.xlsx", dataset.kind.canonical_name());
    let output_path = output_dir.join(&file_name);

    std::fs::create_dir_all(output_dir).map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", output_dir.display()),
            e,
        )
    })?;

    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format(EXPORT_DATE_FORMAT);
    let sheet = workbook.add_worksheet();

    for (col, name) in dataset.columns.iter().enumerate() {
        let col = col as u16;
        sheet
            .write_string(0, col, name)
            .map_err(|e| Error::workbook_export(format!("Failed to write header '{}'", name), e))?;

        let width = (name.chars().count() as f64 * EXPORT_WIDTH_PER_CHAR)
            .max(EXPORT_MIN_COLUMN_WIDTH);
        sheet
            .set_column_width(col, width)
            .map_err(|e| Error::workbook_export("Failed to set column width", e))?;
    }

    for (row, record) in dataset.records.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, name) in dataset.columns.iter().enumerate() {
            let col = col as u16;
            match record.get(name) {
                Some(CellValue::Number(n)) => {
                    sheet
                        .write_number(row, col, *n)
                        .map_err(|e| Error::workbook_export("Failed to write number cell", e))?;
                }
                Some(CellValue::Date(d)) => {
                    sheet
                        .write_datetime_with_format(row, col, d, &date_format)
                        .map_err(|e| Error::workbook_export("Failed to write date cell", e))?;
                }
                Some(CellValue::Text(s)) => {
                    sheet
                        .write_string(row, col, s)
                        .map_err(|e| Error::workbook_export("Failed to write text cell", e))?;
                }
                // Absent fields stay blank in the export
                None => {}
            }
        }
    }

    workbook
        .save(&output_path)
        .map_err(|e| Error::workbook_export(format!("Failed to save {}", file_name), e))?;

    info!(
        "Exported {} dataset to {}",
        dataset.kind.label(),
        output_path.display()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Record, ReportKind};
    use crate::app::services::workbook_reader::extract_first_sheet;
    use chrono::NaiveDate;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::new(
            ReportKind::Overview,
            vec![
                "日期".to_string(),
                "订单数".to_string(),
                "name".to_string(),
            ],
        );

        let mut record = Record::new();
        record.insert(
            "日期",
            CellValue::Date(
                NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
        );
        record.insert("订单数", CellValue::Number(2.0));
        record.insert("name", CellValue::Text("Widget A".to_string()));
        dataset.records.push(record);

        dataset
    }

    #[test]
    fn test_export_uses_canonical_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_normalized_workbook(&sample_dataset(), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "total.xlsx");
        assert!(path.exists());
    }

    #[test]
    fn test_export_round_trips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_normalized_workbook(&sample_dataset(), dir.path()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let (table, _) = extract_first_sheet(&bytes, 0, "total.xlsx").unwrap();

        assert_eq!(table.columns, vec!["日期", "订单数", "name"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0].get("订单数"),
            Some(&crate::app::models::RawCell::Number(2.0))
        );
        assert!(matches!(
            table.rows[0].get("日期"),
            Some(crate::app::models::RawCell::DateTime(_))
        ));
    }
}
