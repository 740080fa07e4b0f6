//! End-to-end tests against real xlsx files (open -> edit -> save -> reopen)

mod common;

use gridstore::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn s(text: &str) -> CellValue {
    CellValue::from(text)
}

fn n(value: f64) -> CellValue {
    CellValue::Number(value)
}

#[test]
fn test_open_lists_sheets_in_order() {
    let dir = TempDir::new().unwrap();
    let path = common::write_scores_fixture(dir.path());

    let store = gridstore::open(&path).unwrap();
    assert_eq!(store.get_sheets(), vec!["Scores", "Offset"]);
    assert_eq!(store.sheet_index("Offset"), Some(1));
    assert_eq!(store.book_path(), path.as_path());
}

#[test]
fn test_get_data_reads_whole_sheet() {
    let dir = TempDir::new().unwrap();
    let store = gridstore::open(common::write_scores_fixture(dir.path())).unwrap();

    let data = store.get_data(0, None, None, None, None);
    assert_eq!(
        data,
        vec![
            vec![s("name"), s("score"), s("passed")],
            vec![s("Ada"), n(95.0), CellValue::Boolean(true)],
            vec![s("Brook"), n(61.5), CellValue::Boolean(true)],
            vec![s("Cai"), n(48.0), CellValue::Boolean(false)],
        ]
    );
}

#[test]
fn test_offset_content_keeps_absolute_positions() {
    let dir = TempDir::new().unwrap();
    let store = gridstore::open(common::write_scores_fixture(dir.path())).unwrap();

    assert_eq!(store.backend().max_row(1).unwrap(), 4);
    assert_eq!(store.backend().max_column(1).unwrap(), 3);
    assert_eq!(
        store.get_row(1, 2, None, None),
        Some(vec![CellValue::Empty, n(1.0), n(2.0)])
    );
    assert_eq!(
        store.get_col(1, 1, None, None),
        Some(vec![CellValue::Empty, CellValue::Empty, n(1.0), n(3.0)])
    );
}

#[test]
fn test_out_of_range_reads_return_none() {
    let dir = TempDir::new().unwrap();
    let store = gridstore::open(common::write_scores_fixture(dir.path())).unwrap();

    assert_eq!(store.get_row(0, 5, None, None), None);
    assert_eq!(store.get_col(0, 4, None, None), None);
    assert_eq!(store.get_row(2, 0, None, None), None);
    assert!(store.get_data(7, None, None, None, None).is_empty());
}

#[test]
fn test_edit_save_as_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = common::write_scores_fixture(dir.path());
    let copy = dir.path().join("copy.xlsx");

    let mut store = gridstore::open(&path).unwrap();
    assert!(store.write_row(0, 4, &[s("Dee"), n(77.0), CellValue::Boolean(true)], None, None));
    assert!(store.write_col(0, 3, &[s("grade"), s("A"), s("C")], None, None));
    assert!(store.create_sheet("Summary", -1));
    let summary = store.sheet_index("Summary").unwrap();
    assert!(store.write_row(summary, 0, &[s("count"), n(4.0)], None, None));
    assert!(store.save_as(&copy));

    let reopened = gridstore::open(&copy).unwrap();
    assert_eq!(reopened.get_sheets(), store.get_sheets());
    assert_eq!(reopened.get_sheets(), vec!["Scores", "Summary", "Offset"]);
    for sheet in 0..3 {
        assert_eq!(
            reopened.get_data(sheet, None, None, None, None),
            store.get_data(sheet, None, None, None, None)
        );
    }
    assert_eq!(
        reopened.get_row(0, 4, None, None),
        Some(vec![s("Dee"), n(77.0), CellValue::Boolean(true), CellValue::Empty])
    );

    // The original file is untouched by save_as
    let original = gridstore::open(&path).unwrap();
    assert_eq!(original.get_sheets(), vec!["Scores", "Offset"]);
    assert_eq!(original.get_row(0, 4, None, None), Some(vec![CellValue::Empty; 3]));
}

#[test]
fn test_save_overwrites_original_path() {
    let dir = TempDir::new().unwrap();
    let path = common::write_scores_fixture(dir.path());

    let mut store = gridstore::open(&path).unwrap();
    assert!(store.write_data(0, &[vec![s("Ann")]], Some(1), None, None, None));
    assert!(store.save());
    // Saving again is harmless
    assert!(store.save());

    let reopened = gridstore::open(&path).unwrap();
    assert_eq!(reopened.get_col(0, 0, Some(1), Some(2)), Some(vec![s("Ann")]));
}

#[test]
fn test_write_data_rejections_leave_file_content_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut store = gridstore::open(common::write_scores_fixture(dir.path())).unwrap();
    let before = store.get_data(0, None, None, None, None);

    assert!(!store.write_data(0, &[vec![n(1.0)]], Some(3), Some(2), None, None));
    assert!(!store.write_data(0, &[vec![n(1.0); 4]], None, None, None, None));
    assert!(!store.write_data(0, &vec![vec![n(1.0)]; 5], None, None, None, None));
    assert_eq!(store.get_data(0, None, None, None, None), before);
}

#[test]
fn test_create_new_workbook() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.xlsx");

    let mut store = gridstore::create(&path, XlsxOptions::default());
    assert!(!path.exists());
    assert_eq!(store.get_sheets(), vec!["Sheet1"]);
    assert!(store.get_data(0, None, None, None, None).is_empty());

    assert!(store.write_row(0, 0, &[s("a"), s("b")], None, None));
    assert!(store.write_row(0, 1, &[n(1.0), n(2.0)], None, None));
    assert!(store.create_sheet("Second", 1));
    assert!(store.save());

    let reopened = gridstore::open(&path).unwrap();
    assert_eq!(reopened.get_sheets(), vec!["Sheet1", "Second"]);
    assert_eq!(
        reopened.get_data(0, None, None, None, None),
        vec![vec![s("a"), s("b")], vec![n(1.0), n(2.0)]]
    );
}

#[test]
fn test_empty_string_extents_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.xlsx");

    let mut store = gridstore::create(&path, XlsxOptions::default());
    assert!(store.write_row(0, 0, &[s("a"), s("")], None, None));
    let before = store.get_data(0, None, None, None, None);
    assert_eq!(before, vec![vec![s("a")]]);
    assert_eq!(store.backend().max_column(0).unwrap(), 1);
    assert!(store.save());

    let reopened = gridstore::open(&path).unwrap();
    assert_eq!(reopened.get_data(0, None, None, None, None), before);
    assert_eq!(reopened.backend().max_row(0).unwrap(), 1);
    assert_eq!(reopened.backend().max_column(0).unwrap(), 1);
}

#[test]
fn test_non_finite_numbers_are_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nan.xlsx");

    let mut store = gridstore::create(&path, XlsxOptions::default());
    assert!(!store.write_row(0, 0, &[n(1.0), n(f64::NAN)], None, None));
    assert!(!store.write_col(0, 0, &[n(f64::NEG_INFINITY)], None, None));
    assert!(store.get_data(0, None, None, None, None).is_empty());

    // The workbook still saves and reopens cleanly
    assert!(store.write_row(0, 0, &[n(1.0)], None, None));
    assert!(store.save());
    let reopened = gridstore::open(&path).unwrap();
    assert_eq!(reopened.get_data(0, None, None, None, None), vec![vec![n(1.0)]]);
}

#[test]
fn test_sheet_index_accepts_position_or_name() {
    let dir = TempDir::new().unwrap();
    let path = common::write_scores_fixture(dir.path());
    let store = gridstore::open(&path).unwrap();

    assert_eq!(store.sheet_index(1), Some(1));
    assert_eq!(store.sheet_index(2), None);
    assert_eq!(store.sheet_index("Scores"), Some(0));
    assert_eq!(store.sheet_index(SheetRef::Name("scores".into())), None);
}

#[test]
fn test_save_failure_returns_false() {
    let dir = TempDir::new().unwrap();
    let mut store = gridstore::create(dir.path().join("book.xlsx"), XlsxOptions::default());

    assert!(!store.save_as(dir.path().join("missing").join("book.xlsx")));
}

#[test]
fn test_open_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(gridstore::open(dir.path().join("nope.xlsx")).is_err());
}

#[test]
fn test_date_modes() {
    let dir = TempDir::new().unwrap();
    let path = common::write_date_fixture(dir.path());

    let serial = gridstore::open(&path).unwrap();
    assert_eq!(serial.get_row(0, 0, None, None), Some(vec![n(45306.0)]));

    let options = XlsxOptions {
        date_mode: DateMode::Text,
        ..Default::default()
    };
    let text = gridstore::open_with(&path, options).unwrap();
    assert_eq!(
        text.get_row(0, 0, None, None),
        Some(vec![s("2024-01-15 00:00:00")])
    );
}
