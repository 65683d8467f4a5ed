//! Spreadsheet cell to raw cell conversion
//!
//! Maps every cell shape calamine can produce onto the four [`RawCell`]
//! arms. Booleans become 0/1 and error cells surface as their display text
//! (`#N/A` etc.), which the normalizer's sentinel rule then catches.

use crate::app::models::RawCell;
use calamine::{Data, DataType};

/// Convert one spreadsheet cell into a raw cell value
pub fn raw_cell_from_sheet(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Text(e.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => cell
            .as_datetime()
            .map(RawCell::DateTime)
            .unwrap_or(RawCell::Empty),
    }
}
