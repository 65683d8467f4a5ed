//! Whole-table normalization
//!
//! Applies the cell normalizer across every cell of every extracted row,
//! preserving column order and row order. No row is dropped: a row whose
//! cells are all sentinels becomes an all-zero record, not an omitted one.

use tracing::debug;

use super::cell::normalize_cell;
use crate::app::models::{CellValue, Dataset, RawCell, Record, ReportKind};
use crate::app::services::workbook_reader::RawTable;

/// Normalize an extracted table into a dataset
pub fn normalize_table(table: RawTable, kind: ReportKind) -> Dataset {
    let mut dataset = Dataset::new(kind, table.columns);

    for raw_row in table.rows {
        let mut record = Record::new();
        for (name, value) in raw_row {
            record.insert(name, normalize_cell(&value));
        }
        dataset.records.push(record);
    }

    debug!(
        "Normalized {} dataset: {} records, {} columns",
        kind.label(),
        dataset.len(),
        dataset.columns.len()
    );

    dataset
}

/// Carry an extracted table into a dataset verbatim, without normalization.
///
/// Used when preprocessing is disabled: numbers stay numbers (including
/// NaN, which the validator later zeroes), strings stay text, and dates
/// stay dates. Downstream metric access coerces text fields on the fly.
pub fn passthrough_table(table: RawTable, kind: ReportKind) -> Dataset {
    let mut dataset = Dataset::new(kind, table.columns);

    for raw_row in table.rows {
        let mut record = Record::new();
        for (name, value) in raw_row {
            let carried = match value {
                RawCell::Empty => continue,
                RawCell::Number(n) => CellValue::Number(n),
                RawCell::Text(s) => CellValue::Text(s),
                RawCell::DateTime(d) => CellValue::Date(d),
            };
            record.insert(name, carried);
        }
        dataset.records.push(record);
    }

    dataset
}
