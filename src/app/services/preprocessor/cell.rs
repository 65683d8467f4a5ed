//! Per-cell normalization rules
//!
//! Rules are evaluated top to bottom; the first matching rule decides the
//! outcome and later rules are not attempted.

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{CellValue, RawCell, parse_float_prefix};
use crate::constants::{DEFAULT_SLASH_DATE_YEAR, SENTINEL_STRINGS};

/// Normalize one raw cell value.
///
/// Rule order:
/// 1. Empty cells, NaN numbers, blank strings, and the literal sentinels
///    `"NaN"`, `"nan"`, `"#N/A"` collapse to `0`
/// 2. Strings containing `/` that parse as a calendar date become dates
/// 3. Strings containing `%` are stripped, parsed, and divided by 100
///    (an unparseable percent is `0`)
/// 4. Strings that parse entirely as a number become that number
/// 5. Everything else passes through unchanged
pub fn normalize_cell(value: &RawCell) -> CellValue {
    // Rule 1: nullish and sentinel values
    match value {
        RawCell::Empty => return CellValue::Number(0.0),
        RawCell::Number(n) if n.is_nan() => return CellValue::Number(0.0),
        RawCell::Text(s)
            if s.trim().is_empty() || SENTINEL_STRINGS.contains(&s.as_str()) =>
        {
            return CellValue::Number(0.0);
        }
        _ => {}
    }

    if let RawCell::Text(s) = value {
        // Rule 2: slash dates
        if s.contains('/') {
            if let Some(date) = parse_slash_date(s) {
                return CellValue::Date(date);
            }
        }

        // Rule 3: percent strings scale to fractions
        if s.contains('%') {
            let stripped = s.replacen('%', "", 1);
            let parsed = parse_float_prefix(&stripped).unwrap_or(0.0);
            return CellValue::Number(parsed / 100.0);
        }

        // Rule 4: strings that are entirely numeric
        if let Ok(n) = s.trim().parse::<f64>() {
            return CellValue::Number(if n.is_nan() { 0.0 } else { n });
        }

        // Rule 5: ordinary text passes through
        return CellValue::Text(s.clone());
    }

    // Rule 5: already-typed values pass through
    match value {
        RawCell::Number(n) => CellValue::Number(*n),
        RawCell::DateTime(d) => CellValue::Date(*d),
        // Empty and Text are fully handled above
        RawCell::Empty | RawCell::Text(_) => CellValue::Number(0.0),
    }
}

/// Parse a slash-separated date string.
///
/// Accepts `YYYY/M/D` (with optional time of day), `M/D/YYYY`, and `M/D`,
/// where month/day strings without a year default to 2000. Returns `None`
/// for slash strings that are not calendar dates, letting the caller fall
/// through to the remaining normalization rules.
pub fn parse_slash_date(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    for format in ["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }

    for format in ["%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    if let [month, day] = parts.as_slice() {
        if let (Ok(month), Ok(day)) = (month.trim().parse(), day.trim().parse()) {
            return NaiveDate::from_ymd_opt(DEFAULT_SLASH_DATE_YEAR, month, day)
                .and_then(|date| date.and_hms_opt(0, 0, 0));
        }
    }

    None
}
