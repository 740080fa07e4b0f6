//! # gridstore
//!
//! Read and write spreadsheet rows, columns and sheets through one uniform,
//! 0-based contract.
//!
//! ## Features
//!
//! - Enumerate and create sheets (negative insertion indices supported)
//! - Read whole sheets, blocks, single rows or single columns
//! - Write blocks, rows or columns with default-range resolution
//! - Failures reported as `false` / `None` / empty results, never panics
//!
//! ## Example
//!
//! ```rust,no_run
//! use gridstore::prelude::*;
//!
//! let mut store = gridstore::open("grades.xlsx").unwrap();
//!
//! for (index, name) in store.get_sheets().iter().enumerate() {
//!     println!("{index}: {name}");
//! }
//!
//! let header = store.get_row(0, 0, None, None);
//! store.write_row(0, 1, &[CellValue::from("Ada"), CellValue::from(95)], None, None);
//! store.save_as("grades-updated.xlsx");
//! ```

pub mod prelude;

pub use gridstore_core::{
    insert_position, validate_sheet_name, CellValue, Error, Result, SheetRef, Span,
    TabularBackend, TabularStore, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};
pub use gridstore_xlsx::{DateMode, SheetGrid, XlsxBackend, XlsxError, XlsxOptions, XlsxResult};

use std::path::Path;

/// A [`TabularStore`] over an xlsx workbook
pub type XlsxStore = TabularStore<XlsxBackend>;

/// Open the spreadsheet at `path` with default options
pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<XlsxStore> {
    open_with(path, XlsxOptions::default())
}

/// Open the spreadsheet at `path`
pub fn open_with<P: AsRef<Path>>(path: P, options: XlsxOptions) -> XlsxResult<XlsxStore> {
    let path = path.as_ref();
    let backend = XlsxBackend::open(path, options)?;
    Ok(TabularStore::new(path, backend))
}

/// Start a new workbook that [`TabularStore::save`] will write to `path`
///
/// Nothing touches the file system until the store is saved.
pub fn create<P: AsRef<Path>>(path: P, options: XlsxOptions) -> XlsxStore {
    TabularStore::new(path.as_ref(), XlsxBackend::new(options))
}
