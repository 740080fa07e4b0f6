//! Workbook saving via rust_xlsxwriter

use std::path::Path;

use gridstore_core::{CellValue, Error, MAX_COLS, MAX_ROWS};
use rust_xlsxwriter::{ColNum, RowNum, Workbook};

use crate::error::XlsxResult;
use crate::grid::SheetGrid;

/// Write `sheets` as a new xlsx file at `path`, replacing any existing file
pub(crate) fn write_sheets(sheets: &[SheetGrid], path: &Path) -> XlsxResult<()> {
    let mut workbook = Workbook::new();

    for grid in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(grid.name())?;

        for (row, col, value) in grid.cells() {
            let (row, col) = cell_position(row, col)?;
            match value {
                CellValue::Empty => {}
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::String(s) => {
                    worksheet.write_string(row, col, s.as_str())?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn cell_position(row: usize, col: usize) -> XlsxResult<(RowNum, ColNum)> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1).into());
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1).into());
    }
    Ok((row as RowNum, col as ColNum))
}
