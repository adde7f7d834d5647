// src/writer.rs
// =============================================================================
// Writes check results back into the sheet.
//
// Only the status cell is always written. Content type and location are
// written when there is something to put there; otherwise whatever the
// cell held before is left alone.
// =============================================================================

use crate::checker::CheckResult;
use crate::config::Columns;
use crate::sheet::Grid;

pub const STATUS_HEADER: &str = "STATUS CODE";
pub const CONTENT_TYPE_HEADER: &str = "CONTENT TYPE";
pub const LOCATION_HEADER: &str = "LOCATION";

/// Labels the output columns in the header row
pub fn write_headers<G: Grid + ?Sized>(grid: &mut G, columns: &Columns) {
    grid.set_cell(1, columns.status, STATUS_HEADER);
    grid.set_cell(1, columns.content_type, CONTENT_TYPE_HEADER);
    grid.set_cell(1, columns.location, LOCATION_HEADER);
}

/// Records one row's result; `row` is the spreadsheet row number
pub fn write_result<G: Grid + ?Sized>(
    grid: &mut G,
    row: u32,
    columns: &Columns,
    result: &CheckResult,
) {
    grid.set_cell(row, columns.status, &result.status_text());

    if let Some(content_type) = result.content_type() {
        grid.set_cell(row, columns.content_type, content_type);
    }
    if let Some(chain) = result.redirect_chain() {
        grid.set_cell(row, columns.location, &chain.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::result::{Hop, Outcome, RedirectChain, NO_URL_MARKER};
    use crate::sheet::memory::MemoryGrid;

    fn columns() -> Columns {
        Columns {
            url: 0,
            status: 1,
            content_type: 2,
            location: 3,
        }
    }

    #[test]
    fn test_headers() {
        let mut grid = MemoryGrid::from_rows(&[&["url", "old", "old", "old"]]);
        write_headers(&mut grid, &columns());
        assert_eq!(grid.cell(1, 0).as_deref(), Some("url"));
        assert_eq!(grid.cell(1, 1).as_deref(), Some("STATUS CODE"));
        assert_eq!(grid.cell(1, 2).as_deref(), Some("CONTENT TYPE"));
        assert_eq!(grid.cell(1, 3).as_deref(), Some("LOCATION"));
    }

    #[test]
    fn test_full_success() {
        let mut grid = MemoryGrid::default();
        let result = CheckResult::Success(Outcome {
            status: 200,
            reason: Some("OK".to_string()),
            content_type: Some("text/html".to_string()),
            redirect_chain: Some(RedirectChain {
                hops: vec![Hop {
                    url: "http://a.test/".to_string(),
                    status: 301,
                }],
                final_status: 200,
            }),
        });
        write_result(&mut grid, 2, &columns(), &result);
        assert_eq!(grid.cell(2, 1).as_deref(), Some("200; OK"));
        assert_eq!(grid.cell(2, 2).as_deref(), Some("text/html"));
        assert_eq!(grid.cell(2, 3).as_deref(), Some("http://a.test/;200"));
    }

    #[test]
    fn test_error_leaves_other_cells_untouched() {
        let mut grid = MemoryGrid::from_rows(&[
            &["url", "STATUS CODE", "CONTENT TYPE", "LOCATION"],
            &["not-a-url", "", "text/plain", "kept"],
        ]);
        write_result(&mut grid, 2, &columns(), &CheckResult::NoUrl);
        assert_eq!(grid.cell(2, 1).as_deref(), Some(NO_URL_MARKER));
        assert_eq!(grid.cell(2, 2).as_deref(), Some("text/plain"));
        assert_eq!(grid.cell(2, 3).as_deref(), Some("kept"));
    }

    #[test]
    fn test_missing_content_type_not_written() {
        let mut grid = MemoryGrid::default();
        let result = CheckResult::Success(Outcome {
            status: 204,
            reason: Some("No Content".to_string()),
            content_type: None,
            redirect_chain: None,
        });
        write_result(&mut grid, 5, &columns(), &result);
        assert_eq!(grid.cell(5, 1).as_deref(), Some("204; No Content"));
        assert_eq!(grid.cell(5, 2), None);
        assert_eq!(grid.cell(5, 3), None);
    }
}
