//! Dataset-level NaN validation
//!
//! A second, independent pass over already-normalized records. Cell
//! normalization resolves sentinel inputs, but a NaN can still reach a
//! dataset through the pass-through branch (an already-numeric NaN that
//! never was a sentinel string). The validator enforces the dataset-level
//! invariant: no record in a validated dataset contains a NaN-valued
//! numeric field.

use tracing::warn;

use crate::app::models::{CellValue, Dataset};

/// Replace every NaN numeric field with `0`; non-numeric fields pass
/// through untouched
pub fn validate_dataset(mut dataset: Dataset) -> Dataset {
    let mut replaced = 0usize;

    for record in &mut dataset.records {
        for value in record.fields.values_mut() {
            if let CellValue::Number(n) = value {
                if n.is_nan() {
                    *value = CellValue::Number(0.0);
                    replaced += 1;
                }
            }
        }
    }

    if replaced > 0 {
        warn!(
            "Validator replaced {} NaN numeric fields with 0 in {} dataset",
            replaced,
            dataset.kind.label()
        );
    }

    dataset
}
