//! # gridstore-xlsx
//!
//! XLSX backend for gridstore.
//!
//! Workbooks are loaded eagerly with `calamine` into an in-memory sparse
//! grid, edited in place, and written back with `rust_xlsxwriter` when the
//! store is saved.

pub mod backend;
pub mod error;
pub mod grid;
pub mod options;

mod reader;
mod writer;

pub use backend::XlsxBackend;
pub use error::{XlsxError, XlsxResult};
pub use grid::SheetGrid;
pub use options::{DateMode, XlsxOptions};
