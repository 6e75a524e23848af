//! Worksheet type

use std::collections::HashMap;

use crate::cell::CellValue;
use crate::error::{Error, Result};

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored sparsely and addressed with 1-based `(row, col)`
/// coordinates. The sheet is an eagerly-materialized table: all cells are
/// in memory once loading finishes, and readers treat it as immutable for
/// their whole lifetime. Reading any coordinate that holds no cell,
/// including coordinates beyond the populated extent, returns
/// [`CellValue::Empty`] rather than an error.
#[derive(Debug, Default)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Sparse cell storage keyed by 1-based (row, col)
    cells: HashMap<(u32, u32), CellValue, ahash::RandomState>,
    /// Highest populated row (0 when empty)
    max_row: u32,
    /// Highest populated column (0 when empty)
    max_col: u32,
}

impl Worksheet {
    /// Create a new empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::default(),
            max_row: 0,
            max_col: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Get the cell value at a 1-based coordinate
    ///
    /// Returns [`CellValue::Empty`] for any unpopulated coordinate,
    /// including row or column 0 and coordinates beyond the populated
    /// extent.
    pub fn value(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value at a 1-based coordinate
    ///
    /// Storing [`CellValue::Empty`] removes the cell. Row or column 0 is
    /// rejected with [`Error::CellOutOfRange`].
    pub fn set_value<V: Into<CellValue>>(&mut self, row: u32, col: u32, value: V) -> Result<()> {
        if row == 0 || col == 0 {
            return Err(Error::CellOutOfRange(row, col));
        }
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
            self.max_row = self.max_row.max(row);
            self.max_col = self.max_col.max(col);
        }
        Ok(())
    }

    /// The populated extent as `(rows, cols)`, or `None` when the sheet is empty
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        if self.cells.is_empty() {
            None
        } else {
            Some((self.max_row, self.max_col))
        }
    }

    /// Number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over populated cells as `((row, col), &value)` in no particular order
    pub fn cells(&self) -> impl Iterator<Item = (&(u32, u32), &CellValue)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut ws = Worksheet::new("Sheet1");
        ws.set_value(1, 1, "a").unwrap();
        ws.set_value(2, 3, 42.0).unwrap();

        assert_eq!(ws.value(1, 1), CellValue::from("a"));
        assert_eq!(ws.value(2, 3), CellValue::Number(42.0));
        assert_eq!(ws.cell_count(), 2);
    }

    #[test]
    fn test_unpopulated_reads_are_empty() {
        let ws = Worksheet::new("Sheet1");
        assert_eq!(ws.value(1, 1), CellValue::Empty);
        assert_eq!(ws.value(0, 0), CellValue::Empty);
        assert_eq!(ws.value(1_000, 1_000), CellValue::Empty);
    }

    #[test]
    fn test_zero_coordinates_rejected_on_write() {
        let mut ws = Worksheet::new("Sheet1");
        assert!(matches!(
            ws.set_value(0, 1, "x"),
            Err(Error::CellOutOfRange(0, 1))
        ));
        assert!(matches!(
            ws.set_value(1, 0, "x"),
            Err(Error::CellOutOfRange(1, 0))
        ));
    }

    #[test]
    fn test_setting_empty_removes_cell() {
        let mut ws = Worksheet::new("Sheet1");
        ws.set_value(1, 1, "a").unwrap();
        ws.set_value(1, 1, CellValue::Empty).unwrap();
        assert_eq!(ws.value(1, 1), CellValue::Empty);
        assert_eq!(ws.cell_count(), 0);
    }

    #[test]
    fn test_dimensions() {
        let mut ws = Worksheet::new("Sheet1");
        assert_eq!(ws.dimensions(), None);
        ws.set_value(3, 2, "a").unwrap();
        ws.set_value(1, 5, "b").unwrap();
        assert_eq!(ws.dimensions(), Some((3, 5)));
    }
}
