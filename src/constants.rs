//! Application constants for shopmetrics
//!
//! This module contains the file-name lexicon, the column-name contract of
//! the three report templates, sentinel values, and export defaults used
//! throughout the application.

// =============================================================================
// Report File-Name Lexicon
// =============================================================================

/// File-name terms identifying an overview (business performance) report
pub const OVERVIEW_TERMS: &[&str] = &["overview", "business performance"];

/// File-name term identifying a product card traffic report
pub const PRODUCT_TRAFFIC_TERM: &str = "product card traffic";

/// File-name term identifying a per-product sample (card list) report
pub const PRODUCT_SAMPLE_TERM: &str = "products card list";

/// Pattern stripping a trailing timestamp suffix and extension from an
/// exported report file name (e.g. `overview report_20240101.xlsx`)
pub const TIMESTAMP_SUFFIX_PATTERN: &str = r"[_-]\d+.*\.xlsx?$";

// =============================================================================
// Column-Name Contract
// =============================================================================

/// Column names as they appear verbatim in exported report headers.
///
/// Exact names are contracted for every metric except the GMV total, whose
/// header varies across template versions and is resolved by substring match
/// (see [`GMV_MATCH_TERM`]).
pub mod columns {
    /// Overview report date column
    pub const DATE: &str = "日期";

    /// Traffic report date column
    pub const TIME: &str = "时间";

    /// Page view count (overview)
    pub const PAGE_VIEWS: &str = "页面浏览次数";

    /// Product visitor count (overview)
    pub const PRODUCT_VISITORS: &str = "商品访客数";

    /// Order count (overview)
    pub const ORDER_COUNT: &str = "订单数";

    /// Exposed user count (traffic, sample)
    pub const EXPOSED_USERS: &str = "曝光用户数";

    /// Clicked user count (traffic, sample)
    pub const CLICKED_USERS: &str = "点击人数";

    /// Added-to-cart user count (traffic, sample)
    pub const CARTED_USERS: &str = "加车人数";

    /// Paid user count (traffic, sample)
    pub const PAID_USERS: &str = "支付人数";

    /// Product name (sample)
    pub const PRODUCT_NAME: &str = "name";

    /// Exposure-to-click conversion rate (traffic, sample)
    pub const EXPOSURE_CLICK_RATE: &str = "曝光到点击转化率";

    /// Click-to-cart conversion rate (traffic, sample)
    pub const CLICK_CART_RATE: &str = "点击到加车转化率";

    /// Click-to-order conversion rate (traffic, sample)
    pub const CLICK_ORDER_RATE: &str = "点击到成交转化率";

    /// Cart-to-order conversion rate (traffic, sample)
    pub const CART_ORDER_RATE: &str = "加车到成交转化率";
}

/// Substring identifying the GMV (gross merchandise value) column.
///
/// Report template versions annotate this header differently (some append a
/// currency symbol), so the column is resolved by lower-cased substring
/// match instead of an exact name.
pub const GMV_MATCH_TERM: &str = "商品交易总额";

/// Currency suffix appended to the formatted GMV total
pub const CURRENCY_SUFFIX: &str = "₱";

// =============================================================================
// Cell Normalization
// =============================================================================

/// Literal strings treated as missing-value sentinels (matched exactly)
pub const SENTINEL_STRINGS: &[&str] = &["NaN", "nan", "#N/A"];

/// Year assumed for month/day date strings carrying no year
pub const DEFAULT_SLASH_DATE_YEAR: i32 = 2000;

// =============================================================================
// Workbook Export
// =============================================================================

/// Number format applied to date cells in re-exported workbooks
pub const EXPORT_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Minimum column width (characters) in re-exported workbooks
pub const EXPORT_MIN_COLUMN_WIDTH: f64 = 12.0;

/// Column width per header character in re-exported workbooks
pub const EXPORT_WIDTH_PER_CHAR: f64 = 1.5;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default output directory for exported workbooks
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Default number of rows shown by the inspect command
pub const DEFAULT_PREVIEW_ROWS: usize = 10;
