// src/run.rs
// =============================================================================
// The run driver: one pass over the sheet, top to bottom.
//
// What happens here:
// 1. Open the workbook and check the URL column exists
// 2. Label the output columns in the header row
// 3. For each data row, in order: check the URL, write the result, count it
// 4. Save the annotated copy once, at the end
// 5. Print the summary
//
// Rows are never checked in parallel; each request finishes before the next
// row is read. Nothing is saved until every row is done, so killing the
// process mid-run loses that run's results.
// =============================================================================

use serde::Serialize;
use std::io::{self, Write};

use crate::checker::{CheckResult, LinkChecker};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::progress::ProgressReporter;
use crate::sheet::{Grid, RowCursor, Workbook};
use crate::writer;

/// Counters accumulated over one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Data rows processed
    pub rows: usize,
    /// Rows that ended in an error marker (and were counted)
    pub errors: usize,
    /// Rows for which a redirect chain was written
    pub redirects: usize,
}

pub async fn run(config: &Config) -> Result<RunSummary> {
    let mut workbook = Workbook::open(&config.input)?;
    let checker = LinkChecker::new(&config.checker)?;

    let cursor = data_rows(&workbook, config)?;
    let mut reporter = ProgressReporter::new(io::stdout(), config.progress_every, cursor.len());
    reporter.start(&config.input, &config.output);

    let summary = process(&mut workbook, cursor, &checker, config, &mut reporter).await;

    workbook.save(&config.output)?;
    reporter.finish(&summary, &config.output);
    Ok(summary)
}

/// Validates the URL column and returns a cursor over the data rows
pub fn data_rows<G: Grid + ?Sized>(grid: &G, config: &Config) -> Result<RowCursor> {
    let max = grid.max_column();
    if config.columns.url >= max {
        return Err(AppError::InvalidColumn {
            column: config.columns.url,
            max,
        });
    }
    Ok(RowCursor::new(
        config.row_offset,
        grid.max_row(),
        config.columns.url + 1,
    ))
}

/// Checks every row the cursor yields and writes the results into `grid`
pub async fn process<G, W>(
    grid: &mut G,
    mut cursor: RowCursor,
    checker: &LinkChecker,
    config: &Config,
    reporter: &mut ProgressReporter<W>,
) -> RunSummary
where
    G: Grid + ?Sized,
    W: Write,
{
    let columns = &config.columns;
    let mut summary = RunSummary::default();

    writer::write_headers(&mut *grid, columns);

    while let Some(row) = cursor.next_row(&*grid) {
        let result = checker.check(row.cell(columns.url)).await;
        tracing::debug!(row = row.number, status = %result.status_text(), "checked");

        writer::write_result(&mut *grid, row.number, columns, &result);
        record(&mut summary, &mut *reporter, row.index, row.number, &result, config);
    }

    summary
}

// Updates the counters for one row and reports it if it's a counted error
fn record<W: Write>(
    summary: &mut RunSummary,
    reporter: &mut ProgressReporter<W>,
    index: usize,
    number: u32,
    result: &CheckResult,
    config: &Config,
) {
    summary.rows += 1;

    // Legacy sheets often had a placeholder in the first data row, so its
    // errors are skipped unless asked for
    if result.is_error() && (index > 0 || config.count_first_row_errors) {
        summary.errors += 1;
        reporter.row_error(number, result);
    }
    if result.redirect_chain().is_some() {
        summary.redirects += 1;
    }

    reporter.tick(summary.rows);
}
