// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: the tool takes one workbook and a handful of
// flags saying which columns to read from and write to.
//
// The raw values parsed here are turned into a validated `Config` in
// src/config.rs - nothing outside that file should read `Cli` directly.
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// The flag names (--ucol, --scol, ...) are short on purpose: they are the
// names people already use in their batch scripts.
#[derive(Parser, Debug)]
#[command(
    name = "sheet-linkcheck",
    version = "0.1.0",
    about = "Check the links in an Excel file",
    long_about = "sheet-linkcheck reads a column of URLs from an .xlsx workbook, requests each one, \
                  and saves a copy of the workbook with the status code, content type and \
                  (optionally) the redirect chain written next to every row."
)]
pub struct Cli {
    /// Input file in Excel format
    ///
    /// Optional at the clap level so that a missing path is reported by us
    /// (exit code 1) rather than by clap's usage error.
    pub infile: Option<PathBuf>,

    /// Index of the column containing URLs (zero-based)
    #[arg(long = "ucol", default_value_t = 1)]
    pub url_col: usize,

    /// Index of the column to write status codes to (zero-based)
    #[arg(long = "scol", default_value_t = 4)]
    pub status_col: usize,

    /// Index of the column to write the content type to (zero-based)
    #[arg(long = "ccol", default_value_t = 5)]
    pub content_type_col: usize,

    /// Index of the column to write the redirect chain to (zero-based)
    #[arg(long = "lcol", default_value_t = 6)]
    pub location_col: usize,

    /// Write the redirection chain to the output file (any non-zero value)
    #[arg(long = "redir", default_value_t = 0)]
    pub track_redirects: i64,

    /// HTTP method used for every request
    ///
    /// HEAD is promoted to GET when --redir is set.
    #[arg(long, value_enum, default_value_t = MethodArg::Get)]
    pub method: MethodArg,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum number of redirects followed for one URL
    #[arg(long, default_value_t = 10)]
    pub max_redirects: usize,

    /// Reuse the final status of a redirect chain instead of requesting the
    /// last hop a second time
    #[arg(long)]
    pub no_reconfirm: bool,

    /// Also count (and report) errors on the first data row
    #[arg(long)]
    pub count_first_row: bool,

    /// Print a progress line after this many rows
    #[arg(long, default_value_t = 50)]
    pub progress_every: usize,

    /// Where to save the annotated workbook (default: <input>_checked.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the final summary as JSON as well
    #[arg(long)]
    pub json_summary: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

// The two request methods we support
//
// #[derive(ValueEnum)] lets clap accept `--method get` / `--method head`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    Get,
    Head,
}
