//! The XLSX implementation of [`TabularBackend`]

use std::path::Path;

use gridstore_core::{
    validate_sheet_name, CellValue, Error, Result, Span, TabularBackend, MAX_COLS, MAX_ROWS,
};

use crate::error::XlsxResult;
use crate::grid::SheetGrid;
use crate::options::XlsxOptions;
use crate::{reader, writer};

/// An xlsx workbook held in memory
///
/// calamine and rust_xlsxwriter both address cells 0-based, so contract
/// indices map onto them directly; the only translation is between the
/// sparse grid's extents and the spreadsheet's row and column limits.
#[derive(Debug, Clone)]
pub struct XlsxBackend {
    sheets: Vec<SheetGrid>,
    options: XlsxOptions,
}

impl XlsxBackend {
    /// Load the workbook at `path`
    ///
    /// Any format calamine reads (xlsx, xlsm, xlsb, xls, ods) can be opened;
    /// saving always produces xlsx.
    pub fn open<P: AsRef<Path>>(path: P, options: XlsxOptions) -> XlsxResult<Self> {
        let path = path.as_ref();
        let sheets = reader::read_sheets(path, &options)?;
        log::debug!("opened {} ({} sheets)", path.display(), sheets.len());
        Ok(Self { sheets, options })
    }

    /// Start an unsaved workbook holding one empty sheet named
    /// [`XlsxOptions::default_sheet_name`]
    pub fn new(options: XlsxOptions) -> Self {
        Self {
            sheets: vec![SheetGrid::new(options.default_sheet_name.clone())],
            options,
        }
    }

    /// Get the options the workbook was opened with
    pub fn options(&self) -> &XlsxOptions {
        &self.options
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&SheetGrid> {
        self.sheets.get(index)
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn grid(&self, sheet: usize) -> Result<&SheetGrid> {
        self.sheets
            .get(sheet)
            .ok_or(Error::SheetOutOfBounds(sheet, self.sheets.len()))
    }

    fn grid_mut(&mut self, sheet: usize) -> Result<&mut SheetGrid> {
        let count = self.sheets.len();
        self.sheets
            .get_mut(sheet)
            .ok_or(Error::SheetOutOfBounds(sheet, count))
    }
}

impl Default for XlsxBackend {
    fn default() -> Self {
        Self::new(XlsxOptions::default())
    }
}

fn check_row(row: usize) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    Ok(())
}

fn check_col(col: usize) -> Result<()> {
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
    }
    Ok(())
}

/// xlsx has no representation for NaN or infinities
fn check_values(data: &[CellValue], len: usize) -> Result<()> {
    match data.iter().take(len).find_map(|value| match value {
        CellValue::Number(n) if !n.is_finite() => Some(*n),
        _ => None,
    }) {
        Some(n) => Err(Error::InvalidValue(format!("{} cannot be stored in xlsx", n))),
        None => Ok(()),
    }
}

impl TabularBackend for XlsxBackend {
    fn save_to(&mut self, path: &Path) -> Result<()> {
        writer::write_sheets(&self.sheets, path)?;
        Ok(())
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name().to_string()).collect()
    }

    fn create_sheet(&mut self, name: &str, position: usize) -> Result<()> {
        validate_sheet_name(name, &self.sheet_names())?;
        if position > self.sheets.len() {
            return Err(Error::SheetOutOfBounds(position, self.sheets.len()));
        }
        self.sheets.insert(position, SheetGrid::new(name));
        Ok(())
    }

    fn max_sheet(&self) -> Option<usize> {
        self.sheets.len().checked_sub(1)
    }

    fn max_row(&self, sheet: usize) -> Result<usize> {
        Ok(self.grid(sheet)?.row_extent())
    }

    fn max_column(&self, sheet: usize) -> Result<usize> {
        Ok(self.grid(sheet)?.col_extent())
    }

    fn read_row(&self, sheet: usize, row: usize, cols: Span) -> Result<Vec<CellValue>> {
        let grid = self.grid(sheet)?;
        Ok(cols.indices().map(|col| grid.value_at(row, col)).collect())
    }

    fn read_col(&self, sheet: usize, col: usize, rows: Span) -> Result<Vec<CellValue>> {
        let grid = self.grid(sheet)?;
        Ok(rows.indices().map(|row| grid.value_at(row, col)).collect())
    }

    fn write_row(
        &mut self,
        sheet: usize,
        row: usize,
        data: &[CellValue],
        cols: Span,
    ) -> Result<()> {
        check_row(row)?;
        if !cols.is_empty() {
            check_col(cols.end - 1)?;
        }
        check_values(data, cols.len())?;
        let grid = self.grid_mut(sheet)?;
        for (i, col) in cols.indices().enumerate() {
            grid.set_value_at(row, col, data.get(i).cloned().unwrap_or_default());
        }
        Ok(())
    }

    fn write_col(
        &mut self,
        sheet: usize,
        col: usize,
        data: &[CellValue],
        rows: Span,
    ) -> Result<()> {
        check_col(col)?;
        if !rows.is_empty() {
            check_row(rows.end - 1)?;
        }
        check_values(data, rows.len())?;
        let grid = self.grid_mut(sheet)?;
        for (i, row) in rows.indices().enumerate() {
            grid.set_value_at(row, col, data.get(i).cloned().unwrap_or_default());
        }
        Ok(())
    }
}
