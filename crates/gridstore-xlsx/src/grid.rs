//! Sparse in-memory cell storage for one sheet
//!
//! Only non-empty cells are stored, using a row-based BTreeMap structure,
//! so extents always reflect the live content.

use std::collections::BTreeMap;

use gridstore_core::CellValue;

/// A named sheet held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    name: String,
    rows: BTreeMap<usize, BTreeMap<usize, CellValue>>,
}

impl SheetGrid {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a cell value, [`CellValue::Empty`] when unset
    pub fn value_at(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(&row)
            .and_then(|r| r.get(&col))
            .cloned()
            .unwrap_or_default()
    }

    /// Set a cell value; an empty value or empty string removes the cell
    ///
    /// xlsx stores no empty-string cells, so `""` is held as a blank cell
    /// to keep extents identical before and after a save.
    pub fn set_value_at(&mut self, row: usize, col: usize, value: CellValue) {
        let blank = match &value {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        };
        if blank {
            if let Some(row_map) = self.rows.get_mut(&row) {
                row_map.remove(&col);
                if row_map.is_empty() {
                    self.rows.remove(&row);
                }
            }
        } else {
            self.rows.entry(row).or_default().insert(col, value);
        }
    }

    /// One past the last occupied row index (0 when empty)
    pub fn row_extent(&self) -> usize {
        self.rows.keys().next_back().map_or(0, |row| row + 1)
    }

    /// One past the last occupied column index (0 when empty)
    pub fn col_extent(&self) -> usize {
        self.rows
            .values()
            .filter_map(|r| r.keys().next_back())
            .max()
            .map_or(0, |col| col + 1)
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if the sheet holds no values
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over non-empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &CellValue)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, value)| (row, col, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_follow_content() {
        let mut grid = SheetGrid::new("Data");
        assert_eq!((grid.row_extent(), grid.col_extent()), (0, 0));
        assert!(grid.is_empty());

        grid.set_value_at(5, 3, CellValue::Number(1.0));
        grid.set_value_at(2, 7, CellValue::Number(2.0));
        assert_eq!((grid.row_extent(), grid.col_extent()), (6, 8));

        grid.set_value_at(2, 7, CellValue::Empty);
        assert_eq!((grid.row_extent(), grid.col_extent()), (6, 4));

        grid.set_value_at(5, 3, CellValue::Empty);
        assert_eq!((grid.row_extent(), grid.col_extent()), (0, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_empty_string_clears_cell() {
        let mut grid = SheetGrid::new("Data");
        grid.set_value_at(0, 0, CellValue::string("a"));
        grid.set_value_at(0, 1, CellValue::string(""));
        assert_eq!((grid.row_extent(), grid.col_extent()), (1, 1));
        assert_eq!(grid.value_at(0, 1), CellValue::Empty);

        grid.set_value_at(0, 0, CellValue::string(""));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_value_access() {
        let mut grid = SheetGrid::new("Data");
        grid.set_value_at(0, 1, CellValue::string("x"));

        assert_eq!(grid.value_at(0, 1), CellValue::string("x"));
        assert_eq!(grid.value_at(0, 0), CellValue::Empty);
        assert_eq!(grid.value_at(9, 9), CellValue::Empty);
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_cells_row_major() {
        let mut grid = SheetGrid::new("Data");
        grid.set_value_at(1, 0, CellValue::from(3));
        grid.set_value_at(0, 2, CellValue::from(2));
        grid.set_value_at(0, 1, CellValue::from(1));

        let order: Vec<_> = grid.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 0)]);
    }
}
