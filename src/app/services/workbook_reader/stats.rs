//! Extraction statistics for workbook reading

use serde::{Deserialize, Serialize};

/// Statistics for one sheet extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractStats {
    /// Number of columns found in the header row
    pub columns: usize,

    /// Total number of rows examined below the header
    pub total_rows: usize,

    /// Number of rows that produced a record
    pub data_rows: usize,

    /// Number of all-empty rows skipped
    pub blank_rows_skipped: usize,
}

impl ExtractStats {
    /// Create empty statistics for a sheet with the given column count
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            total_rows: 0,
            data_rows: 0,
            blank_rows_skipped: 0,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} columns, {} of {} rows extracted ({} blank)",
            self.columns, self.data_rows, self.total_rows, self.blank_rows_skipped
        )
    }
}
