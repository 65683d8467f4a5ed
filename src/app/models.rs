//! Data models for report processing
//!
//! This module contains the core data structures for representing report
//! workbooks: the recognized report kinds, raw and normalized cell values,
//! records, datasets, derived summary statistics, and chart series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Report Kinds
// =============================================================================

/// The recognized report template shapes.
///
/// The kind of a workbook is decided from its file name and determines both
/// the header-row offset at which tabular data begins and the canonical name
/// used when the normalized dataset is re-exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    /// Shop-wide business performance overview, one row per day
    Overview,
    /// Product card traffic report, one row per day
    ProductTraffic,
    /// Per-product sample report, one row per product
    ProductSample,
    /// File name matched no known template
    Unknown,
}

impl ReportKind {
    /// Zero-based row index at which the column header row begins
    pub fn header_row_offset(&self) -> usize {
        match self {
            ReportKind::Overview => 4,
            ReportKind::ProductTraffic | ReportKind::ProductSample => 2,
            ReportKind::Unknown => 0,
        }
    }

    /// Canonical output name for re-exported workbooks
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ReportKind::Overview => "total",
            ReportKind::ProductTraffic => "producttotal",
            ReportKind::ProductSample => "products",
            ReportKind::Unknown => "unknown",
        }
    }

    /// Human-readable label for logs and status messages
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Overview => "overview",
            ReportKind::ProductTraffic => "product traffic",
            ReportKind::ProductSample => "product sample",
            ReportKind::Unknown => "unknown",
        }
    }

    /// Whether this kind maps to one of the three session dataset slots
    pub fn is_known(&self) -> bool {
        !matches!(self, ReportKind::Unknown)
    }
}

// =============================================================================
// Cell Values
// =============================================================================

/// An untyped cell value as extracted from a spreadsheet.
///
/// Booleans are coerced to 0/1 and error cells to their display string
/// (`#N/A` etc.) at extraction time, so every workbook cell maps onto one of
/// these four arms.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Empty or absent cell
    Empty,
    /// Numeric cell; may be NaN
    Number(f64),
    /// String cell, verbatim
    Text(String),
    /// Date or datetime cell
    DateTime(NaiveDateTime),
}

/// A normalized cell value.
///
/// Invariant: a `Number` produced by the normalizer is finite; un-coercible
/// numerics are replaced by `0`. The validator re-enforces this over whole
/// datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Finite number
    Number(f64),
    /// Calendar date (with optional time-of-day)
    Date(NaiveDateTime),
    /// Pass-through text
    Text(String),
}

impl CellValue {
    /// Numeric value if this cell is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Date value if this cell is a date
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Coerce to a number, tolerating text fields.
    ///
    /// Numbers pass through, text is parsed by longest numeric prefix, and
    /// anything else contributes `0`. Metric access is total: this never
    /// fails, matching the aggregation failure policy.
    pub fn as_number_lossy(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_float_prefix(s).unwrap_or(0.0),
            CellValue::Date(_) => 0.0,
        }
    }

    /// Render for display in previews and breakdown labels
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// Parse the longest numeric prefix of a string, like `parseFloat`.
///
/// Leading whitespace is skipped; parsing stops at the first character that
/// cannot extend a float literal. Returns `None` when no digits are found.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while end < bytes.len() {
        let b = bytes[end];
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'+' | b'-' => {
                // Sign is only valid at the start or right after the exponent
                let after_exp = end > 0 && (bytes[end - 1] == b'e' || bytes[end - 1] == b'E');
                if end != 0 && !after_exp {
                    break;
                }
            }
            b'.' => {
                if seen_dot || seen_exp {
                    break;
                }
                seen_dot = true;
            }
            b'e' | b'E' => {
                if seen_exp || !seen_digit {
                    break;
                }
                seen_exp = true;
            }
            _ => break,
        }
        end += 1;
    }

    // Back off a trailing exponent marker or sign that never got digits
    while end > 0 && matches!(bytes[end - 1], b'e' | b'E' | b'+' | b'-') {
        end -= 1;
    }

    if !seen_digit {
        return None;
    }

    trimmed[..end].parse::<f64>().ok()
}

// =============================================================================
// Records and Datasets
// =============================================================================

/// One row of a dataset: column name to normalized cell value.
///
/// Cells that were empty in the workbook are absent from the map, not zero;
/// metric access resolves absent fields to `0` at read time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: HashMap<String, CellValue>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Insert a field value
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Numeric value of a field; absent or non-numeric fields resolve to `0`
    pub fn number(&self, name: &str) -> f64 {
        self.fields
            .get(name)
            .map(CellValue::as_number_lossy)
            .unwrap_or(0.0)
    }

    /// Whether the record carries the named field
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no populated fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of records produced from one workbook.
///
/// Column order reflects the header row of the source sheet; every record
/// draws its keys from that column set. A dataset is replaced wholesale on
/// re-upload of the same report kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Report kind this dataset was ingested as
    pub kind: ReportKind,

    /// Column names in original header order
    pub columns: Vec<String>,

    /// Data rows in original sheet order
    pub records: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset for a report kind
    pub fn new(kind: ReportKind, columns: Vec<String>) -> Self {
        Self {
            kind,
            columns,
            records: Vec::new(),
        }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the header row carried the named column
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

// =============================================================================
// Summary Statistics
// =============================================================================

/// Derived, read-only aggregate over the three session datasets.
///
/// Recomputed on demand; present only when all three dataset slots are
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Shop-wide totals from the overview dataset
    pub overview: OverviewTotals,

    /// Funnel totals from the product traffic dataset
    #[serde(rename = "productTraffic")]
    pub product_traffic: TrafficTotals,

    /// Counts from the per-product sample dataset
    #[serde(rename = "productSample")]
    pub product_sample: SampleTotals,
}

/// Totals computed from the overview dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewTotals {
    /// Sum of page views
    pub page_views: f64,
    /// Sum of product visitors
    pub product_visitors: f64,
    /// Sum of orders
    pub orders: f64,
    /// Sum of the fuzzy-matched GMV column
    pub gmv: f64,
    /// GMV formatted to two decimals with the currency suffix
    pub gmv_display: String,
}

/// Totals computed from the product traffic dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficTotals {
    /// Sum of exposed users
    pub exposed_users: f64,
    /// Sum of clicked users
    pub clicked_users: f64,
    /// Sum of added-to-cart users
    pub carted_users: f64,
    /// Sum of paid users
    pub paid_users: f64,
}

/// Counts computed from the per-product sample dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTotals {
    /// Total number of sampled products
    pub total_products: usize,
    /// Number of sampled products with at least one paying user
    pub products_with_orders: usize,
}

impl SampleTotals {
    /// Number of sampled products without any paying user
    pub fn products_without_orders(&self) -> usize {
        self.total_products.saturating_sub(self.products_with_orders)
    }
}

impl StatisticsSummary {
    /// Overview funnel rows, widest stage first
    pub fn overview_funnel(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("page views", self.overview.page_views),
            ("visitors", self.overview.product_visitors),
            ("orders", self.overview.orders),
            ("gmv", self.overview.gmv),
        ]
    }

    /// Product traffic funnel rows, widest stage first
    pub fn product_funnel(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("exposed", self.product_traffic.exposed_users),
            ("clicked", self.product_traffic.clicked_users),
            ("carted", self.product_traffic.carted_users),
            ("paid", self.product_traffic.paid_users),
        ]
    }
}

// =============================================================================
// Chart Series
// =============================================================================

/// A chronologically ascending projection of a dataset prepared for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Metric names in presentation order
    pub metrics: Vec<String>,

    /// Data points sorted ascending by full date
    pub points: Vec<SeriesPoint>,
}

/// One dated point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Underlying full date, used for ordering
    pub date: NaiveDateTime,

    /// Short month/day display label (`3/1`); not year-disambiguated
    pub label: String,

    /// Metric values keyed by output label
    pub values: HashMap<String, f64>,
}

impl Series {
    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One labeled point of a per-category breakdown (e.g. per product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownPoint {
    /// Category label, e.g. a product name
    pub label: String,

    /// Metric values keyed by output label
    pub values: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_offsets() {
        assert_eq!(ReportKind::Overview.header_row_offset(), 4);
        assert_eq!(ReportKind::ProductTraffic.header_row_offset(), 2);
        assert_eq!(ReportKind::ProductSample.header_row_offset(), 2);
        assert_eq!(ReportKind::Unknown.header_row_offset(), 0);
    }

    #[test]
    fn test_report_kind_canonical_names() {
        assert_eq!(ReportKind::Overview.canonical_name(), "total");
        assert_eq!(ReportKind::ProductTraffic.canonical_name(), "producttotal");
        assert_eq!(ReportKind::ProductSample.canonical_name(), "products");
        assert_eq!(ReportKind::Unknown.canonical_name(), "unknown");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5"), Some(12.5));
        assert_eq!(parse_float_prefix("12.5abc"), Some(12.5));
        assert_eq!(parse_float_prefix("  -3.25"), Some(-3.25));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("100.50 ₱"), Some(100.5));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_lossy_coercion() {
        assert_eq!(CellValue::Number(5.0).as_number_lossy(), 5.0);
        assert_eq!(CellValue::Text("100.50".to_string()).as_number_lossy(), 100.5);
        assert_eq!(CellValue::Text("free".to_string()).as_number_lossy(), 0.0);
        let date = NaiveDateTime::parse_from_str("2024-03-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(CellValue::Date(date).as_number_lossy(), 0.0);
    }

    #[test]
    fn test_record_missing_field_is_zero() {
        let record = Record::new();
        assert_eq!(record.number("页面浏览次数"), 0.0);
    }

    #[test]
    fn test_sample_totals_without_orders() {
        let totals = SampleTotals {
            total_products: 10,
            products_with_orders: 3,
        };
        assert_eq!(totals.products_without_orders(), 7);
    }
}
