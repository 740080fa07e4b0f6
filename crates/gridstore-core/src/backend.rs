//! The primitive operations a spreadsheet backend must provide

use std::path::Path;

use crate::cell::CellValue;
use crate::error::Result;
use crate::span::Span;

/// A spreadsheet backend: the capability set the [`TabularStore`] facade
/// builds its public API on.
///
/// All indices are 0-based. Implementations translate them into whatever
/// convention the underlying library uses. Primitives may assume the sheet
/// index has been checked against [`max_sheet`](Self::max_sheet) but must
/// still fail cleanly on a bad index.
///
/// [`TabularStore`]: crate::TabularStore
pub trait TabularBackend {
    /// Persist the whole workbook to `path`
    fn save_to(&mut self, path: &Path) -> Result<()>;

    /// Sheet names in storage order
    fn sheet_names(&self) -> Vec<String>;

    /// Insert a new, empty sheet named `name` at `position` (`0..=sheet_count`)
    fn create_sheet(&mut self, name: &str, position: usize) -> Result<()>;

    /// Highest valid sheet index, `None` for a workbook without sheets
    fn max_sheet(&self) -> Option<usize>;

    /// Row extent of a sheet: one past the last occupied row index
    fn max_row(&self, sheet: usize) -> Result<usize>;

    /// Column extent of a sheet: one past the last occupied column index
    fn max_column(&self, sheet: usize) -> Result<usize>;

    /// Values of `row` across the columns in `cols`, in order
    fn read_row(&self, sheet: usize, row: usize, cols: Span) -> Result<Vec<CellValue>>;

    /// Values of `col` across the rows in `rows`, in order
    fn read_col(&self, sheet: usize, col: usize, rows: Span) -> Result<Vec<CellValue>>;

    /// Assign `data` positionally to `row` across `cols`
    ///
    /// Cells in `cols` without a matching entry in `data` are cleared and
    /// entries past the end of `cols` are ignored.
    fn write_row(&mut self, sheet: usize, row: usize, data: &[CellValue], cols: Span)
        -> Result<()>;

    /// Assign `data` positionally to `col` across `rows`, with the same
    /// padding rules as [`write_row`](Self::write_row)
    fn write_col(&mut self, sheet: usize, col: usize, data: &[CellValue], rows: Span)
        -> Result<()>;
}
