//! Shopmetrics Library
//!
//! A Rust library for turning exported TikTok Shop performance spreadsheets
//! into normalized datasets, aggregate business metrics, and chart-ready
//! time series.
//!
//! This library provides tools for:
//! - Classifying report workbooks by file name (overview, product traffic,
//!   product sample) and locating their header rows
//! - Normalizing heterogeneous cell content (sentinels, percent strings,
//!   numeric strings, slash dates) into a canonical typed form
//! - Enforcing the no-NaN invariant over normalized datasets
//! - Aggregating cross-dataset summary statistics with fuzzy GMV lookup
//! - Building date-ordered series for charting
//! - Re-exporting normalized datasets as canonically named workbooks

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod dataset_store;
        pub mod ingest;
        pub mod preprocessor;
        pub mod report_classifier;
        pub mod series_builder;
        pub mod workbook_reader;
        pub mod workbook_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, Dataset, RawCell, Record, ReportKind, StatisticsSummary};
pub use config::Config;

/// Result type alias for shopmetrics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or read
    #[error("Workbook error in '{file}': {message}")]
    Workbook { file: String, message: String },

    /// Workbook export failed
    #[error("Workbook export error: {message}")]
    WorkbookExport {
        message: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Header row not found at the classifier-selected offset
    #[error("Missing header row in '{file}' at offset {offset}")]
    MissingHeader { file: String, offset: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error with file context
    pub fn workbook(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a workbook export error
    pub fn workbook_export(
        message: impl Into<String>,
        source: rust_xlsxwriter::XlsxError,
    ) -> Self {
        Self::WorkbookExport {
            message: message.into(),
            source,
        }
    }

    /// Create a missing header error
    pub fn missing_header(file: impl Into<String>, offset: usize) -> Self {
        Self::MissingHeader {
            file: file.into(),
            offset,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::new(std::io::ErrorKind::Other, message_str),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::WorkbookExport {
            message: "Workbook export failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
