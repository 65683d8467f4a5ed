//! Fuzzy column resolution
//!
//! The GMV column header varies across report template versions (some
//! append a currency annotation such as `商品交易总额(₱)`), so it cannot be
//! addressed by exact name. It is resolved by lower-cased substring match
//! against the column set instead.

use crate::app::models::Record;

/// Find the first column whose lower-cased name contains `term`
pub fn find_field<'a>(columns: &'a [String], term: &str) -> Option<&'a str> {
    let term = term.to_lowercase();
    columns
        .iter()
        .find(|name| name.to_lowercase().contains(&term))
        .map(String::as_str)
}

/// Numeric value of the fuzzy-matched column in one record.
///
/// Contributes `0` when no column matches or the record carries no value
/// for the matched column.
pub fn fuzzy_number(record: &Record, columns: &[String], term: &str) -> f64 {
    find_field(columns, term)
        .map(|column| record.number(column))
        .unwrap_or(0.0)
}
