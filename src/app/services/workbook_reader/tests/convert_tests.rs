//! Tests for spreadsheet cell conversion

use crate::app::models::RawCell;
use crate::app::services::workbook_reader::raw_cell_from_sheet;
use calamine::{CellErrorType, Data};

#[test]
fn test_empty_cell() {
    assert_eq!(raw_cell_from_sheet(&Data::Empty), RawCell::Empty);
}

#[test]
fn test_numeric_cells() {
    assert_eq!(raw_cell_from_sheet(&Data::Float(1.5)), RawCell::Number(1.5));
    assert_eq!(raw_cell_from_sheet(&Data::Int(7)), RawCell::Number(7.0));
}

#[test]
fn test_string_cell() {
    assert_eq!(
        raw_cell_from_sheet(&Data::String("12.5%".to_string())),
        RawCell::Text("12.5%".to_string())
    );
}

#[test]
fn test_booleans_become_zero_one() {
    assert_eq!(raw_cell_from_sheet(&Data::Bool(true)), RawCell::Number(1.0));
    assert_eq!(raw_cell_from_sheet(&Data::Bool(false)), RawCell::Number(0.0));
}

#[test]
fn test_error_cells_surface_as_display_text() {
    assert_eq!(
        raw_cell_from_sheet(&Data::Error(CellErrorType::NA)),
        RawCell::Text("#N/A".to_string())
    );
}
