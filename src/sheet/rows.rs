// src/sheet/rows.rs
// =============================================================================
// The row iterator.
//
// `RowCursor` hands out data rows lazily, in order, exactly once each. It
// does not hold on to the grid between calls: the caller passes the grid
// into `next_row`, which leaves it free to write results back into the
// same grid before asking for the next row.
// =============================================================================

use super::Grid;

/// Snapshot of one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Spreadsheet row number (1-based)
    pub number: u32,
    /// Position among the data rows (0 = first row after the header)
    pub index: usize,
    cells: Vec<Option<String>>,
}

impl Row {
    /// Value of the cell at a zero-based column, `None` if empty or missing
    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).and_then(|c| c.as_deref())
    }
}

/// Walks the rows from `offset` up to the last row
#[derive(Debug, Clone)]
pub struct RowCursor {
    next: u32,
    last: u32,
    offset: u32,
    width: usize,
}

impl RowCursor {
    /// `offset` is the first data row; `width` is how many columns to read
    pub fn new(offset: u32, last: u32, width: usize) -> Self {
        Self {
            next: offset,
            last,
            offset,
            width,
        }
    }

    /// Number of data rows this cursor will produce in total
    pub fn len(&self) -> usize {
        (self.last + 1).saturating_sub(self.offset) as usize
    }

    pub fn next_row<G: Grid + ?Sized>(&mut self, grid: &G) -> Option<Row> {
        if self.next > self.last {
            return None;
        }
        let number = self.next;
        self.next += 1;

        let cells = (0..self.width).map(|col| grid.cell(number, col)).collect();
        Some(Row {
            number,
            index: (number - self.offset) as usize,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::memory::MemoryGrid;

    #[test]
    fn test_skips_header() {
        let grid = MemoryGrid::from_rows(&[
            &["name", "url"],
            &["a", "http://a.test"],
            &["b", "http://b.test"],
        ]);
        let mut cursor = RowCursor::new(2, grid.max_row(), grid.max_column());
        assert_eq!(cursor.len(), 2);

        let first = cursor.next_row(&grid).unwrap();
        assert_eq!(first.number, 2);
        assert_eq!(first.index, 0);
        assert_eq!(first.cell(1), Some("http://a.test"));

        let second = cursor.next_row(&grid).unwrap();
        assert_eq!(second.number, 3);
        assert_eq!(second.index, 1);
        assert_eq!(second.cell(0), Some("b"));

        assert!(cursor.next_row(&grid).is_none());
        assert!(cursor.next_row(&grid).is_none());
    }

    #[test]
    fn test_missing_cells_are_none() {
        let grid = MemoryGrid::from_rows(&[&["name", "url"], &["only-name", ""]]);
        let mut cursor = RowCursor::new(2, grid.max_row(), 2);
        let row = cursor.next_row(&grid).unwrap();
        assert_eq!(row.cell(1), None);
        // past the width we read
        assert_eq!(row.cell(7), None);
    }

    #[test]
    fn test_header_only_sheet() {
        let grid = MemoryGrid::from_rows(&[&["name", "url"]]);
        let mut cursor = RowCursor::new(2, grid.max_row(), 2);
        assert_eq!(cursor.len(), 0);
        assert!(cursor.next_row(&grid).is_none());
    }

    #[test]
    fn test_grid_can_change_between_rows() {
        let mut grid = MemoryGrid::from_rows(&[&["url"], &["x"], &["y"]]);
        let mut cursor = RowCursor::new(2, grid.max_row(), 1);
        let row = cursor.next_row(&grid).unwrap();
        grid.set_cell(row.number, 3, "done");
        let row = cursor.next_row(&grid).unwrap();
        assert_eq!(row.cell(0), Some("y"));
        assert_eq!(grid.cell(2, 3).as_deref(), Some("done"));
    }
}
