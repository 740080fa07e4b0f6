//! The public tabular store facade

use std::path::{Path, PathBuf};

use crate::backend::TabularBackend;
use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::sheet::{insert_position, SheetRef};
use crate::span::Span;

/// User-facing API over a [`TabularBackend`]
///
/// Omitted range bounds are resolved against the sheet extents queried
/// fresh from the backend on every call: a missing start is 0, a missing
/// end is the extent for reads and the length of the supplied data for
/// writes. A sheet index must lie in `[0, max_sheet]` and a row or column
/// index in `[0, extent]`; the index equal to the extent addresses the
/// first free line.
///
/// No operation returns an error. Invalid input and backend failures are
/// logged at `warn` level and reported as `false`, `None` or an empty `Vec`.
#[derive(Debug)]
pub struct TabularStore<B> {
    book_path: PathBuf,
    backend: B,
}

impl<B: TabularBackend> TabularStore<B> {
    /// Wrap an opened backend; `book_path` is where [`save`](Self::save) writes
    pub fn new<P: Into<PathBuf>>(book_path: P, backend: B) -> Self {
        Self {
            book_path: book_path.into(),
            backend,
        }
    }

    /// Path the workbook was opened from
    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwrap the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Names of all sheets in storage order
    pub fn get_sheets(&self) -> Vec<String> {
        self.backend.sheet_names()
    }

    /// Resolve a sheet given by index or by exact name to its index
    ///
    /// An index resolves to itself when it lies in `[0, max_sheet]`.
    pub fn sheet_index<S: Into<SheetRef>>(&self, sheet: S) -> Option<usize> {
        let sheet = sheet.into();
        settle("sheet_index", sheet.resolve(&self.backend.sheet_names()))
    }

    /// Create an empty sheet at `index`
    ///
    /// Negative indices count back from the end (`-1` inserts before the
    /// last sheet) and out-of-range indices clamp, as with list insertion.
    pub fn create_sheet(&mut self, name: &str, index: isize) -> bool {
        let position = insert_position(index, self.sheet_count());
        let created = settle("create_sheet", self.backend.create_sheet(name, position)).is_some();
        if created {
            log::debug!("created sheet '{}' at position {}", name, position);
        }
        created
    }

    /// Read a rectangular block of a sheet, one `Vec` per row
    ///
    /// Returns an empty `Vec` when the sheet or the bounds are invalid.
    pub fn get_data(
        &self,
        sheet: usize,
        start_row: Option<usize>,
        end_row: Option<usize>,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Vec<Vec<CellValue>> {
        settle(
            "get_data",
            self.try_get_data(sheet, start_row, end_row, start_col, end_col),
        )
        .unwrap_or_default()
    }

    /// Read one row across `[start_col, end_col)`
    ///
    /// Returns `None` when the sheet, the row or the column bounds are
    /// out of range.
    pub fn get_row(
        &self,
        sheet: usize,
        row: usize,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Option<Vec<CellValue>> {
        settle("get_row", self.try_get_row(sheet, row, start_col, end_col))
    }

    /// Read one column across `[start_row, end_row)`
    ///
    /// Returns `None` when the sheet, the column or the row bounds are
    /// out of range.
    pub fn get_col(
        &self,
        sheet: usize,
        col: usize,
        start_row: Option<usize>,
        end_row: Option<usize>,
    ) -> Option<Vec<CellValue>> {
        settle("get_col", self.try_get_col(sheet, col, start_row, end_row))
    }

    /// Overwrite a block of existing cells with `data`, row by row
    ///
    /// The block defaults to `data.len()` rows by the longest row's length,
    /// anchored at `(start_row, start_col)`. Shorter rows are padded with
    /// [`CellValue::Empty`]. The write is rejected, leaving the sheet
    /// untouched, when either span is reversed or reaches past the current
    /// sheet extents.
    ///
    /// An empty sheet has extents of 0, so it only accepts empty data here.
    /// Use [`write_row`](Self::write_row) or [`write_col`](Self::write_col)
    /// to grow a sheet.
    pub fn write_data(
        &mut self,
        sheet: usize,
        data: &[Vec<CellValue>],
        start_row: Option<usize>,
        end_row: Option<usize>,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> bool {
        settle(
            "write_data",
            self.try_write_data(sheet, data, start_row, end_row, start_col, end_col),
        )
        .is_some()
    }

    /// Write `data` into one row, starting at `start_col`
    pub fn write_row(
        &mut self,
        sheet: usize,
        row: usize,
        data: &[CellValue],
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> bool {
        settle(
            "write_row",
            self.try_write_row(sheet, row, data, start_col, end_col),
        )
        .is_some()
    }

    /// Write `data` into one column, starting at `start_row`
    pub fn write_col(
        &mut self,
        sheet: usize,
        col: usize,
        data: &[CellValue],
        start_row: Option<usize>,
        end_row: Option<usize>,
    ) -> bool {
        settle(
            "write_col",
            self.try_write_col(sheet, col, data, start_row, end_row),
        )
        .is_some()
    }

    /// Save the workbook back to the path it was opened from
    pub fn save(&mut self) -> bool {
        let path = self.book_path.clone();
        self.save_as(path)
    }

    /// Save the workbook to `path`; the original path is left unchanged
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let saved = settle("save", self.backend.save_to(path)).is_some();
        if saved {
            log::debug!("saved workbook to {}", path.display());
        }
        saved
    }

    fn sheet_count(&self) -> usize {
        self.backend.max_sheet().map_or(0, |max| max + 1)
    }

    fn check_sheet(&self, sheet: usize) -> Result<()> {
        match self.backend.max_sheet() {
            Some(max) if sheet <= max => Ok(()),
            _ => Err(Error::SheetOutOfBounds(sheet, self.sheet_count())),
        }
    }

    fn row_span(&self, sheet: usize, start: Option<usize>, end: Option<usize>) -> Result<Span> {
        let max_row = self.backend.max_row(sheet)?;
        let span = Span::resolve(start, end, max_row)?;
        if span.end > max_row {
            return Err(Error::RowOutOfBounds(span.end, max_row));
        }
        Ok(span)
    }

    fn col_span(&self, sheet: usize, start: Option<usize>, end: Option<usize>) -> Result<Span> {
        let max_col = self.backend.max_column(sheet)?;
        let span = Span::resolve(start, end, max_col)?;
        if span.end > max_col {
            return Err(Error::ColumnOutOfBounds(span.end, max_col));
        }
        Ok(span)
    }

    fn try_get_data(
        &self,
        sheet: usize,
        start_row: Option<usize>,
        end_row: Option<usize>,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Result<Vec<Vec<CellValue>>> {
        self.check_sheet(sheet)?;
        let rows = self.row_span(sheet, start_row, end_row)?;
        let cols = self.col_span(sheet, start_col, end_col)?;

        rows.indices()
            .map(|row| self.backend.read_row(sheet, row, cols))
            .collect()
    }

    fn try_get_row(
        &self,
        sheet: usize,
        row: usize,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Result<Vec<CellValue>> {
        self.check_sheet(sheet)?;
        let max_row = self.backend.max_row(sheet)?;
        if row > max_row {
            return Err(Error::RowOutOfBounds(row, max_row));
        }
        let cols = self.col_span(sheet, start_col, end_col)?;
        self.backend.read_row(sheet, row, cols)
    }

    fn try_get_col(
        &self,
        sheet: usize,
        col: usize,
        start_row: Option<usize>,
        end_row: Option<usize>,
    ) -> Result<Vec<CellValue>> {
        self.check_sheet(sheet)?;
        let max_col = self.backend.max_column(sheet)?;
        if col > max_col {
            return Err(Error::ColumnOutOfBounds(col, max_col));
        }
        let rows = self.row_span(sheet, start_row, end_row)?;
        self.backend.read_col(sheet, col, rows)
    }

    fn try_write_data(
        &mut self,
        sheet: usize,
        data: &[Vec<CellValue>],
        start_row: Option<usize>,
        end_row: Option<usize>,
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Result<()> {
        self.check_sheet(sheet)?;
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        let rows = Span::resolve_len(start_row, end_row, data.len())?;
        let cols = Span::resolve_len(start_col, end_col, width)?;

        let max_row = self.backend.max_row(sheet)?;
        if rows.end > max_row {
            return Err(Error::RowOutOfBounds(rows.end, max_row));
        }
        let max_col = self.backend.max_column(sheet)?;
        if cols.end > max_col {
            return Err(Error::ColumnOutOfBounds(cols.end, max_col));
        }

        for (row, values) in rows.indices().zip(data) {
            self.backend.write_row(sheet, row, values, cols)?;
        }
        Ok(())
    }

    fn try_write_row(
        &mut self,
        sheet: usize,
        row: usize,
        data: &[CellValue],
        start_col: Option<usize>,
        end_col: Option<usize>,
    ) -> Result<()> {
        self.check_sheet(sheet)?;
        let cols = Span::resolve_len(start_col, end_col, data.len())?;
        self.backend.write_row(sheet, row, data, cols)
    }

    fn try_write_col(
        &mut self,
        sheet: usize,
        col: usize,
        data: &[CellValue],
        start_row: Option<usize>,
        end_row: Option<usize>,
    ) -> Result<()> {
        self.check_sheet(sheet)?;
        let rows = Span::resolve_len(start_row, end_row, data.len())?;
        self.backend.write_col(sheet, col, data, rows)
    }
}

/// Log a failed operation and keep only the success value
fn settle<T>(operation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} failed: {}", operation, err);
            None
        }
    }
}
