//! Chart series derivation
//!
//! Reshapes a normalized dataset into the series the charting layer
//! consumes: date-ordered points with short month/day labels, and
//! per-product breakdowns keyed by a label column. Conversion-rate fields
//! are stored as fractions (the ingestion-time ÷100 of percent cells) and
//! are rescaled ×100 here for percentage display; the two rescales are
//! separate steps and must stay separate.
//!
//! Points are sorted by the underlying full date, not the display label;
//! equal month/day labels from different years keep their chronological
//! order (the display label itself is not year-disambiguated).

pub mod builder;

#[cfg(test)]
pub mod tests;

// Re-export main types and functions for easy access
pub use builder::{ValueScale, build_breakdown, build_series, short_date_label};

/// Overview chart fields: daily page views, visitors, and orders
pub const OVERVIEW_METRIC_FIELDS: &[(&str, &str)] = &[
    ("页面浏览次数", "页面浏览次数"),
    ("商品访客数", "商品访客数"),
    ("订单数", "订单数"),
];

/// Traffic chart fields: daily funnel user counts
pub const TRAFFIC_COUNT_FIELDS: &[(&str, &str)] = &[
    ("曝光人数", "曝光用户数"),
    ("点击人数", "点击人数"),
    ("加车人数", "加车人数"),
    ("支付人数", "支付人数"),
];

/// Conversion-rate chart fields, short labels
pub const CONVERSION_RATE_FIELDS: &[(&str, &str)] = &[
    ("曝光到点击", "曝光到点击转化率"),
    ("点击到加车", "点击到加车转化率"),
    ("点击到成交", "点击到成交转化率"),
    ("加车到成交", "加车到成交转化率"),
];

/// Per-product rate breakdown fields, full column names as labels
pub const SAMPLE_RATE_FIELDS: &[(&str, &str)] = &[
    ("曝光到点击转化率", "曝光到点击转化率"),
    ("点击到加车转化率", "点击到加车转化率"),
    ("点击到成交转化率", "点击到成交转化率"),
    ("加车到成交转化率", "加车到成交转化率"),
];

/// Per-product count breakdown fields
pub const SAMPLE_COUNT_FIELDS: &[(&str, &str)] = &[
    ("曝光人数", "曝光用户数"),
    ("点击人数", "点击人数"),
    ("加车人数", "加车人数"),
    ("支付人数", "支付人数"),
];
