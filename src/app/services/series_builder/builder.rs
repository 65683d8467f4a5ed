//! Series and breakdown construction

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::app::models::{BreakdownPoint, CellValue, Dataset, Record, Series, SeriesPoint};
use crate::app::services::preprocessor::parse_slash_date;

/// Display scaling applied to metric values at series-build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueScale {
    /// Values pass through unchanged
    Identity,
    /// Fractional rates are rescaled ×100 for percentage display
    Percent,
}

impl ValueScale {
    fn apply(&self, value: f64) -> f64 {
        match self {
            ValueScale::Identity => value,
            ValueScale::Percent => value * 100.0,
        }
    }
}

/// Build a date-ordered series from a dataset.
///
/// `fields` maps output labels to source columns; values are extracted
/// verbatim (already normalized) and scaled per `scale`. Records whose
/// date field is absent or unparseable are skipped. The result is sorted
/// ascending by the underlying full date.
pub fn build_series(
    dataset: &Dataset,
    date_column: &str,
    fields: &[(&str, &str)],
    scale: ValueScale,
) -> Series {
    let mut points = Vec::with_capacity(dataset.len());
    let mut undated = 0usize;

    for record in &dataset.records {
        let Some(date) = record_date(record, date_column) else {
            undated += 1;
            continue;
        };

        let mut values = HashMap::with_capacity(fields.len());
        for (label, column) in fields {
            values.insert(label.to_string(), scale.apply(record.number(column)));
        }

        points.push(SeriesPoint {
            date,
            label: short_date_label(&date),
            values,
        });
    }

    if undated > 0 {
        debug!(
            "Series over {} dataset skipped {} records without a parseable '{}' field",
            dataset.kind.label(),
            undated,
            date_column
        );
    }

    points.sort_by_key(|point| point.date);

    Series {
        metrics: fields.iter().map(|(label, _)| label.to_string()).collect(),
        points,
    }
}

/// Build a per-category breakdown keyed by a label column.
///
/// Used for the sample report, where rows represent products rather than
/// days; row order is preserved and no date sort applies.
pub fn build_breakdown(
    dataset: &Dataset,
    label_column: &str,
    fields: &[(&str, &str)],
    scale: ValueScale,
) -> Vec<BreakdownPoint> {
    dataset
        .records
        .iter()
        .map(|record| {
            let mut values = HashMap::with_capacity(fields.len());
            for (label, column) in fields {
                values.insert(label.to_string(), scale.apply(record.number(column)));
            }

            BreakdownPoint {
                label: record
                    .get(label_column)
                    .map(CellValue::display)
                    .unwrap_or_default(),
                values,
            }
        })
        .collect()
}

/// Short month/day display label (`3/1`, `1/15`); not zero-padded and not
/// year-disambiguated
pub fn short_date_label(date: &NaiveDateTime) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Date of a record's date field, tolerating unnormalized text dates
fn record_date(record: &Record, date_column: &str) -> Option<NaiveDateTime> {
    match record.get(date_column)? {
        CellValue::Date(date) => Some(*date),
        CellValue::Text(text) => parse_slash_date(text),
        CellValue::Number(_) => None,
    }
}
