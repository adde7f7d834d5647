// src/sheet/mod.rs
// =============================================================================
// Everything that touches the spreadsheet.
//
// Submodules:
// - workbook: loading and saving .xlsx files (umya-spreadsheet)
// - rows: walking the data rows one at a time
//
// The rest of the program only sees the `Grid` trait below, so the run
// driver and the result writer don't care whether the cells live in an
// .xlsx worksheet or in a plain in-memory table (handy in tests).
//
// Coordinates: rows are 1-based (spreadsheet row numbers), columns are
// 0-based (the --ucol/--scol/... flags).
// =============================================================================

mod rows;
mod workbook;

pub use rows::RowCursor;
pub use workbook::Workbook;

/// A rectangular table of text cells that can be read and written
pub trait Grid {
    /// Number of the last used row (0 for an empty sheet)
    fn max_row(&self) -> u32;

    /// Number of used columns
    fn max_column(&self) -> usize;

    /// Text of a cell, `None` when the cell is empty or absent
    fn cell(&self, row: u32, col: usize) -> Option<String>;

    fn set_cell(&mut self, row: u32, col: usize, value: &str);
}
