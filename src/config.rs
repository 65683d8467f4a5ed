//! Configuration management and validation.
//!
//! Provides configuration structures for the ingestion pipeline and the
//! workbook export feature. Configuration is assembled from CLI arguments.

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ingestion pipeline settings
    pub processing: ProcessingConfig,

    /// Workbook re-export settings
    pub export: ExportConfig,
}

/// Settings controlling the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Apply full cell normalization to freshly parsed data.
    ///
    /// When false, raw cell values are carried into the dataset verbatim and
    /// only the NaN validator runs; downstream metric access then coerces
    /// text fields on the fly.
    pub preprocess: bool,
}

/// Settings controlling normalized workbook export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Write normalized copies of ingested datasets
    pub enabled: bool,

    /// Directory receiving `<canonical>.xlsx` files
    pub output_path: PathBuf,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { preprocess: true }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.export.enabled && self.export.output_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Export is enabled but no output path is set",
            ));
        }
        Ok(())
    }
}
