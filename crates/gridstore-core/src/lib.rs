//! # gridstore-core
//!
//! Backend-neutral contract for reading and writing tabular spreadsheet data.
//!
//! This crate provides:
//! - [`CellValue`] - Scalar cell contents (numbers, strings, booleans, empty)
//! - [`Span`] - Half-open `[start, end)` index intervals over rows or columns
//! - [`TabularBackend`] - The primitive operations every backend must supply
//! - [`TabularStore`] - The public facade that resolves default ranges,
//!   validates bounds and turns backend failures into sentinel values
//!
//! All indices are 0-based, whatever convention the backend uses internally.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gridstore_core::{CellValue, TabularStore};
//!
//! let mut store = TabularStore::new("book.xlsx", backend);
//! store.write_row(0, 0, &[CellValue::from("id"), CellValue::from("name")], None, None);
//! let header = store.get_row(0, 0, None, None);
//! store.save();
//! ```

pub mod backend;
pub mod cell;
pub mod error;
pub mod sheet;
pub mod span;
pub mod store;

pub use backend::TabularBackend;
pub use cell::CellValue;
pub use error::{Error, Result};
pub use sheet::{insert_position, validate_sheet_name, SheetRef};
pub use span::Span;
pub use store::TabularStore;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: usize = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: usize = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
