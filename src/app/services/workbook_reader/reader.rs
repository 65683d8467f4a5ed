//! Core workbook extraction
//!
//! Opens a workbook from in-memory bytes, locates the header row of the
//! first sheet at the classifier-selected offset, and extracts the data
//! rows below it as raw records. Also provides read-only workbook
//! inspection for previews.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::convert::raw_cell_from_sheet;
use super::stats::ExtractStats;
use crate::app::models::RawCell;
use crate::{Error, Result};

/// One extracted data row: column name to raw cell value.
///
/// Empty cells are omitted, so a key is present only when the workbook
/// carried a value for it.
pub type RawRecord = HashMap<String, RawCell>;

/// Raw tabular content of one sheet
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column names from the header row, in sheet order
    pub columns: Vec<String>,

    /// Data rows below the header, in sheet order
    pub rows: Vec<RawRecord>,
}

/// Extract the first sheet of a workbook as raw records.
///
/// `header_row_offset` is the absolute zero-based sheet row at which the
/// column header row begins; all rows below it become records. Rows whose
/// cells are all empty are skipped, matching the behavior of the original
/// export tooling.
pub fn extract_first_sheet(
    bytes: &[u8],
    header_row_offset: usize,
    file: &str,
) -> Result<(RawTable, ExtractStats)> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| Error::workbook(file, format!("failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| Error::workbook(file, "workbook has no sheets"))?;

    let range = workbook.worksheet_range(first_sheet).map_err(|e| {
        Error::workbook(
            file,
            format!("failed to read worksheet '{}': {}", first_sheet, e),
        )
    })?;

    // The cell range may not start at A1; offsets are absolute sheet rows.
    let start_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let skip = header_row_offset.saturating_sub(start_row);

    let mut rows = range.rows().skip(skip);
    let header_row = rows
        .next()
        .ok_or_else(|| Error::missing_header(file, header_row_offset))?;

    let columns = header_columns(header_row);
    if columns.is_empty() {
        return Err(Error::missing_header(file, header_row_offset));
    }

    let mut stats = ExtractStats::new(columns.len());
    let mut table = RawTable {
        columns: columns.iter().map(|(_, name)| name.clone()).collect(),
        rows: Vec::new(),
    };

    for row in rows {
        stats.total_rows += 1;

        let mut record = RawRecord::new();
        for (index, name) in &columns {
            let Some(cell) = row.get(*index) else {
                continue;
            };
            match raw_cell_from_sheet(cell) {
                RawCell::Empty => {}
                value => {
                    record.insert(name.clone(), value);
                }
            }
        }

        if record.is_empty() {
            stats.blank_rows_skipped += 1;
            continue;
        }

        table.rows.push(record);
        stats.data_rows += 1;
    }

    debug!(
        "Extracted sheet '{}': {} columns, {} data rows ({} blank skipped)",
        first_sheet,
        table.columns.len(),
        stats.data_rows,
        stats.blank_rows_skipped
    );

    Ok((table, stats))
}

/// Column names with their cell indices, skipping unnamed header cells
fn header_columns(header_row: &[Data]) -> Vec<(usize, String)> {
    header_row
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| match cell {
            Data::Empty => None,
            other => {
                let name = other.to_string().trim().to_string();
                (!name.is_empty()).then_some((index, name))
            }
        })
        .collect()
}

/// Shape summary of one sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetInfo {
    /// Sheet name
    pub name: String,
    /// Number of rows in the used cell range
    pub rows: usize,
    /// Number of columns in the used cell range
    pub cols: usize,
}

/// Read-only summary of a workbook's sheets plus a bounded preview of the
/// first sheet's leading rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookSummary {
    /// Per-sheet shape information
    pub sheets: Vec<SheetInfo>,

    /// Leading rows of the first sheet rendered as display strings
    pub preview: Vec<Vec<String>>,
}

/// Inspect a workbook without extracting or normalizing it
pub fn describe_workbook(bytes: &[u8], file: &str, preview_rows: usize) -> Result<WorkbookSummary> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| Error::workbook(file, format!("failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(Error::workbook(file, "workbook has no sheets"));
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    let mut preview = Vec::new();

    for (i, name) in sheet_names.iter().enumerate() {
        let range = workbook.worksheet_range(name).map_err(|e| {
            Error::workbook(file, format!("failed to read worksheet '{}': {}", name, e))
        })?;

        let (rows, cols) = range.get_size();
        sheets.push(SheetInfo {
            name: name.clone(),
            rows,
            cols,
        });

        if i == 0 {
            preview = range
                .rows()
                .take(preview_rows)
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect();
        }
    }

    Ok(WorkbookSummary { sheets, preview })
}
