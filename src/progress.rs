// src/progress.rs
// =============================================================================
// Human-readable progress output.
//
// Prints the start banner, a line every N rows, a diagnostic line for each
// counted error, and the final summary. Output goes to any `io::Write`
// (stdout in the binary, a Vec<u8> in tests).
//
// Write failures are ignored: losing a progress line (e.g. stdout closed by
// `| head`) must not lose the results of the run.
// =============================================================================

use std::io::Write;
use std::path::Path;

use crate::checker::CheckResult;
use crate::run::RunSummary;

pub struct ProgressReporter<W: Write> {
    out: W,
    every: usize,
    total: usize,
    width: usize,
}

impl<W: Write> ProgressReporter<W> {
    /// `total` is the number of data rows that will be processed
    pub fn new(out: W, every: usize, total: usize) -> Self {
        Self {
            out,
            every: every.max(1),
            total,
            width: total.to_string().len(),
        }
    }

    pub fn start(&mut self, input: &Path, output: &Path) {
        let _ = writeln!(
            self.out,
            "Processing {} rows in file {}.",
            self.total,
            input.display()
        );
        let _ = writeln!(self.out, "Will save records to XLSX file {}.", output.display());
    }

    /// Called after each row with the number of rows done so far
    pub fn tick(&mut self, processed: usize) {
        if processed > 1 && processed % self.every == 0 {
            let _ = writeln!(
                self.out,
                "{:>width$} rows processed. ({:.0}%)",
                processed,
                percent(processed, self.total),
                width = self.width
            );
        }
    }

    /// Reports a failed row; `row` is the spreadsheet row number
    pub fn row_error(&mut self, row: u32, result: &CheckResult) {
        let _ = match result {
            CheckResult::Success(_) => return,
            CheckResult::NoUrl => writeln!(self.out, "No valid URL for row {}.", row),
            CheckResult::ConnectionRefused { url } => {
                writeln!(self.out, "The connection was refused to {}: row {}.", url, row)
            }
            CheckResult::OtherError { url, message } => {
                writeln!(self.out, "Could not check {}: {}: row {}.", url, message, row)
            }
        };
    }

    pub fn finish(&mut self, summary: &RunSummary, output: &Path) {
        let _ = writeln!(
            self.out,
            "Finished. {} rows processed, saved to file {}.",
            summary.rows,
            output.display()
        );
        let _ = writeln!(
            self.out,
            "{} errors reported ({:.0}%)",
            summary.errors,
            percent(summary.errors, summary.rows)
        );
        let _ = writeln!(
            self.out,
            "{} redirects reported ({:.0}%)",
            summary.redirects,
            percent(summary.redirects, summary.rows)
        );
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
