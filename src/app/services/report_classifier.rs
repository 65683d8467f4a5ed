//! Report classification from workbook file names
//!
//! Exported report files carry their template identity in the file name
//! (plus a trailing export timestamp). This module maps a file name to a
//! report kind, the header-row offset needed to locate its tabular data,
//! and the canonical name used for normalized re-export.

use crate::app::models::ReportKind;
use crate::constants::{
    OVERVIEW_TERMS, PRODUCT_SAMPLE_TERM, PRODUCT_TRAFFIC_TERM, TIMESTAMP_SUFFIX_PATTERN,
};
use regex::Regex;
use serde::Serialize;

/// Classification result for one workbook file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileConfig {
    /// Recognized report kind
    pub kind: ReportKind,

    /// Zero-based sheet row at which the header row begins
    pub header_row_offset: usize,

    /// Canonical output name (`total`, `producttotal`, `products`, `unknown`)
    pub canonical_name: &'static str,
}

impl FileConfig {
    fn for_kind(kind: ReportKind) -> Self {
        Self {
            kind,
            header_row_offset: kind.header_row_offset(),
            canonical_name: kind.canonical_name(),
        }
    }

    /// File name of the normalized re-export for this report kind
    pub fn export_file_name(&self) -> String {
        format!("{}.xlsx", self.canonical_name)
    }
}

/// Classify a workbook by file name.
///
/// The name is lower-cased and any trailing `[_-]<digits>…` timestamp suffix
/// plus extension is stripped before testing substring membership against
/// the report lexicon. First matching rule wins; unmatched names classify as
/// [`ReportKind::Unknown`] with offset 0.
pub fn classify(file_name: &str) -> FileConfig {
    let clean_name = clean_file_name(file_name);

    if OVERVIEW_TERMS.iter().any(|term| clean_name.contains(term)) {
        return FileConfig::for_kind(ReportKind::Overview);
    }
    if clean_name.contains(PRODUCT_TRAFFIC_TERM) {
        return FileConfig::for_kind(ReportKind::ProductTraffic);
    }
    if clean_name.contains(PRODUCT_SAMPLE_TERM) {
        return FileConfig::for_kind(ReportKind::ProductSample);
    }

    FileConfig::for_kind(ReportKind::Unknown)
}

/// Lower-case a file name and strip the export timestamp suffix
fn clean_file_name(file_name: &str) -> String {
    let suffix = Regex::new(TIMESTAMP_SUFFIX_PATTERN).unwrap();
    let lowered = file_name.to_lowercase();
    suffix.replace(&lowered, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_report_with_timestamp() {
        let config = classify("Overview Report_20240101.xlsx");
        assert_eq!(config.kind, ReportKind::Overview);
        assert_eq!(config.header_row_offset, 4);
        assert_eq!(config.canonical_name, "total");
    }

    #[test]
    fn test_business_performance_alias() {
        let config = classify("Business Performance-20231201120000.xls");
        assert_eq!(config.kind, ReportKind::Overview);
        assert_eq!(config.header_row_offset, 4);
    }

    #[test]
    fn test_product_card_traffic() {
        let config = classify("Product Card Traffic_20240215.xlsx");
        assert_eq!(config.kind, ReportKind::ProductTraffic);
        assert_eq!(config.header_row_offset, 2);
        assert_eq!(config.canonical_name, "producttotal");
    }

    #[test]
    fn test_products_card_list() {
        let config = classify("Products Card List-2024.xls");
        assert_eq!(config.kind, ReportKind::ProductSample);
        assert_eq!(config.header_row_offset, 2);
        assert_eq!(config.canonical_name, "products");
    }

    #[test]
    fn test_unknown_file() {
        let config = classify("random_file.xlsx");
        assert_eq!(config.kind, ReportKind::Unknown);
        assert_eq!(config.header_row_offset, 0);
        assert_eq!(config.canonical_name, "unknown");
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(classify("OVERVIEW.xlsx").kind, ReportKind::Overview);
        assert_eq!(
            classify("pRoDuCts CaRd LiSt.xlsx").kind,
            ReportKind::ProductSample
        );
    }

    #[test]
    fn test_name_without_extension() {
        assert_eq!(classify("overview export").kind, ReportKind::Overview);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            classify("Products Card List_20240101.xlsx").export_file_name(),
            "products.xlsx"
        );
    }
}
