//! Cross-dataset summary statistics
//!
//! Computes the read-only summary over the three session datasets:
//! shop-wide totals from the overview report, funnel totals from the
//! product traffic report, and product counts from the sample report.
//! Aggregation is all-or-nothing: no summary exists until all three
//! datasets are present.
//!
//! ## Architecture
//!
//! - [`summary`] - Summary computation over the three datasets
//! - [`fuzzy`] - Substring-based column resolution for the GMV total
//!
//! Every metric reads its column by exact contracted name except the GMV
//! total, whose header varies across report template versions and is
//! resolved by fuzzy lookup.

pub mod fuzzy;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use fuzzy::{find_field, fuzzy_number};
pub use summary::{aggregate, format_gmv};
