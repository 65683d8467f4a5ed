//! Test utilities for normalization testing

use crate::app::models::RawCell;
use crate::app::services::workbook_reader::{RawRecord, RawTable};


/// Build a raw table from (column, value) rows, with column order taken
/// from the first row
pub fn raw_table_from_rows(rows: Vec<Vec<(&str, RawCell)>>) -> RawTable {
    let columns = rows
        .first()
        .map(|row| row.iter().map(|(name, _)| name.to_string()).collect())
        .unwrap_or_default();

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect::<RawRecord>()
        })
        .collect();

    RawTable { columns, rows }
}
