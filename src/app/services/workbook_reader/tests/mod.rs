//! Test utilities for workbook extraction testing
//!
//! Workbook fixtures are built in memory with `rust_xlsxwriter` and read
//! back through the extraction path, so tests exercise real XLSX bytes.

use rust_xlsxwriter::{Format, Workbook};

mod convert_tests;

/// Build an overview-shaped workbook: four banner rows, then a header row
/// at offset 4 and two data rows
pub fn build_overview_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy/mm/dd");
    let sheet = workbook.add_worksheet();

    // Banner rows the real export carries above the header
    sheet.write_string(0, 0, "TikTok Shop Analytics").unwrap();
    sheet.write_string(1, 0, "Store: demo-store").unwrap();
    sheet.write_string(2, 0, "Currency: PHP").unwrap();

    sheet.write_string(4, 0, "日期").unwrap();
    sheet.write_string(4, 1, "页面浏览次数").unwrap();
    sheet.write_string(4, 2, "商品访客数").unwrap();
    sheet.write_string(4, 3, "订单数").unwrap();
    sheet.write_string(4, 4, "商品交易总额(₱)").unwrap();

    let first = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    sheet
        .write_datetime_with_format(5, 0, &first, &date_format)
        .unwrap();
    sheet.write_number(5, 1, 10.0).unwrap();
    sheet.write_number(5, 2, 5.0).unwrap();
    sheet.write_number(5, 3, 2.0).unwrap();
    sheet.write_string(5, 4, "100.50").unwrap();

    let second = chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    sheet
        .write_datetime_with_format(6, 0, &second, &date_format)
        .unwrap();
    sheet.write_number(6, 1, 20.0).unwrap();
    sheet.write_number(6, 2, 8.0).unwrap();
    sheet.write_number(6, 3, 3.0).unwrap();
    sheet.write_string(6, 4, "250.25").unwrap();

    workbook.save_to_buffer().unwrap()
}

/// Build a minimal workbook with the header at row 0 and mixed cell types,
/// including a blank row between two data rows
pub fn build_mixed_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "name").unwrap();
    sheet.write_string(0, 1, "曝光用户数").unwrap();
    sheet.write_string(0, 2, "曝光到点击转化率").unwrap();
    sheet.write_string(0, 3, "flag").unwrap();

    sheet.write_string(1, 0, "Widget A").unwrap();
    sheet.write_number(1, 1, 50.0).unwrap();
    sheet.write_string(1, 2, "12.5%").unwrap();
    sheet.write_boolean(1, 3, true).unwrap();

    // Row 2 left entirely blank

    sheet.write_string(3, 0, "Widget B").unwrap();
    sheet.write_number(3, 1, 30.0).unwrap();
    sheet.write_string(3, 2, "#N/A").unwrap();

    workbook.save_to_buffer().unwrap()
}

/// Build a workbook whose sheet is completely empty
pub fn build_empty_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save_to_buffer().unwrap()
}
