// src/sheet/workbook.rs
// =============================================================================
// Loading and saving .xlsx files.
//
// We use `umya-spreadsheet` because it can read a workbook, let us edit a
// few cells, and write it back with everything else left as it was.
//
// Only the active sheet is processed, like Excel's "current sheet".
// umya uses 1-based (column, row) pairs, so column indices are shifted by
// one on the way in.
// =============================================================================

use std::path::Path;

use umya_spreadsheet::Spreadsheet;

use super::Grid;
use crate::error::{AppError, Result};

pub struct Workbook {
    book: Spreadsheet,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| AppError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "workbook loaded");
        Ok(Self { book })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|source| {
            AppError::Persist {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "workbook saved");
        Ok(())
    }
}

fn coordinate(row: u32, col: usize) -> (u32, u32) {
    (col as u32 + 1, row)
}

impl Grid for Workbook {
    fn max_row(&self) -> u32 {
        self.book.get_active_sheet().get_highest_row()
    }

    fn max_column(&self) -> usize {
        self.book.get_active_sheet().get_highest_column() as usize
    }

    fn cell(&self, row: u32, col: usize) -> Option<String> {
        let value = self.book.get_active_sheet().get_value(coordinate(row, col));
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn set_cell(&mut self, row: u32, col: usize, value: &str) {
        self.book
            .get_active_sheet_mut()
            .get_cell_mut(coordinate(row, col))
            .set_value(value);
    }
}
