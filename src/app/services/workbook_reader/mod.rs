//! Workbook extraction for exported report files
//!
//! This module reads the first sheet of an XLSX/XLS workbook and extracts
//! raw tabular records starting at the classifier-selected header-row
//! offset. Cell content is carried as [`RawCell`](crate::app::models::RawCell)
//! values; no normalization happens here.
//!
//! ## Architecture
//!
//! - [`reader`] - Sheet extraction, header location, and workbook inspection
//! - [`convert`] - Spreadsheet cell to raw cell conversion
//! - [`stats`] - Extraction statistics
//!
//! ## Usage
//!
//! ```rust
//! use shopmetrics::app::services::workbook_reader::extract_first_sheet;
//!
//! # fn example(bytes: &[u8]) -> shopmetrics::Result<()> {
//! let (table, stats) = extract_first_sheet(bytes, 4, "overview.xlsx")?;
//! println!("Extracted {} rows ({})", table.rows.len(), stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use convert::raw_cell_from_sheet;
pub use reader::{RawRecord, RawTable, SheetInfo, WorkbookSummary, describe_workbook, extract_first_sheet};
pub use stats::ExtractStats;
