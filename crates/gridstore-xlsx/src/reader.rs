//! Workbook loading via calamine

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use gridstore_core::CellValue;

use crate::error::XlsxResult;
use crate::grid::SheetGrid;
use crate::options::{DateMode, XlsxOptions};

/// Load every sheet of the workbook at `path`, in workbook order
pub(crate) fn read_sheets(path: &Path, options: &XlsxOptions) -> XlsxResult<Vec<SheetGrid>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let mut grid = SheetGrid::new(name);

        // calamine ranges start at the first used cell, not at A1
        let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
        let row_offset = row_offset as usize;
        let col_offset = col_offset as usize;
        for (row, col, data) in range.used_cells() {
            grid.set_value_at(
                row_offset + row,
                col_offset + col,
                convert(data, options.date_mode),
            );
        }

        log::debug!(
            "loaded sheet '{}' ({} cells)",
            grid.name(),
            grid.cell_count()
        );
        sheets.push(grid);
    }

    Ok(sheets)
}

fn convert(data: &Data, date_mode: DateMode) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::string(s.as_str()),
        Data::DateTime(dt) => match (date_mode, dt.as_datetime()) {
            (DateMode::Text, Some(datetime)) => {
                CellValue::string(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            _ => CellValue::Number(dt.as_f64()),
        },
        other => CellValue::string(other.to_string()),
    }
}
