#![allow(dead_code)]

//! Fixture workbooks written with rust_xlsxwriter

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

/// Write a two-sheet workbook:
///
/// - "Scores": header row plus three students, A1:C4
/// - "Offset": values starting at B3, nothing in column A or rows 1-2
pub fn write_scores_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("scores.xlsx");
    let mut workbook = Workbook::new();

    let scores = workbook.add_worksheet();
    scores.set_name("Scores").unwrap();
    scores.write_string(0, 0, "name").unwrap();
    scores.write_string(0, 1, "score").unwrap();
    scores.write_string(0, 2, "passed").unwrap();
    for (i, (name, score)) in [("Ada", 95.0), ("Brook", 61.5), ("Cai", 48.0)]
        .iter()
        .enumerate()
    {
        let row = i as u32 + 1;
        scores.write_string(row, 0, *name).unwrap();
        scores.write_number(row, 1, *score).unwrap();
        scores.write_boolean(row, 2, *score >= 50.0).unwrap();
    }

    let offset = workbook.add_worksheet();
    offset.set_name("Offset").unwrap();
    offset.write_number(2, 1, 1.0).unwrap();
    offset.write_number(2, 2, 2.0).unwrap();
    offset.write_number(3, 1, 3.0).unwrap();

    workbook.save(&path).unwrap();
    path
}

/// Write a one-sheet workbook with a date in A1
pub fn write_date_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("dates.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let date = ExcelDateTime::from_ymd(2024, 1, 15).unwrap();
    let format = Format::new().set_num_format("yyyy-mm-dd");
    sheet.write_datetime_with_format(0, 0, &date, &format).unwrap();

    workbook.save(&path).unwrap();
    path
}
