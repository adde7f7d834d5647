// src/config.rs
// =============================================================================
// One place for every setting the run needs.
//
// The CLI hands us raw numbers; this module checks them, fills in the
// defaults, and works out the output filename. Everything downstream takes
// a `Config` (or one of its parts) instead of reaching for globals.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{Cli, MethodArg};
use crate::error::{AppError, Result};

/// Suffix appended to the input file's base name to form the output name
pub const OUTPUT_SUFFIX: &str = "_checked";

/// Last zero-based column an xlsx sheet can have (XFD)
pub const MAX_COLUMN: usize = 16383;

/// First spreadsheet row holding data (row 1 is the header)
pub const DEFAULT_ROW_OFFSET: u32 = 2;

/// Column positions (zero-based) the run reads from and writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    /// Column holding the URL to check
    pub url: usize,
    /// Column receiving the status text or error marker
    pub status: usize,
    /// Column receiving the MIME type
    pub content_type: usize,
    /// Column receiving the redirect chain
    pub location: usize,
}

impl Default for Columns {
    // B, E, F, G: the layout the original batch scripts produced
    fn default() -> Self {
        Self {
            url: 1,
            status: 4,
            content_type: 5,
            location: 6,
        }
    }
}

impl Columns {
    fn validate(&self) -> Result<()> {
        let named = [
            ("url", self.url),
            ("status", self.status),
            ("content type", self.content_type),
            ("location", self.location),
        ];
        for (name, col) in &named {
            if *col > MAX_COLUMN {
                return Err(AppError::Config(format!(
                    "the {} column {} is past the last xlsx column ({}, XFD)",
                    name, col, MAX_COLUMN
                )));
            }
        }
        for (i, (a_name, a)) in named.iter().enumerate() {
            for (b_name, b) in &named[i + 1..] {
                if a == b {
                    return Err(AppError::Config(format!(
                        "the {} and {} columns are both set to {}",
                        a_name, b_name, a
                    )));
                }
            }
        }
        Ok(())
    }
}

/// HTTP method used for each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

impl Method {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

/// Settings for the link checker only
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub method: Method,
    pub track_redirects: bool,
    /// Re-request the last hop of a chain to confirm its status
    pub reconfirm_redirects: bool,
    pub max_redirects: usize,
    pub timeout: Option<Duration>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            method: Method::Get,
            track_redirects: false,
            reconfirm_redirects: true,
            max_redirects: 10,
            timeout: None,
        }
    }
}

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: Columns,
    pub checker: CheckerConfig,
    pub row_offset: u32,
    /// Count errors on data row 0 as well (legacy scripts skipped it)
    pub count_first_row_errors: bool,
    pub progress_every: usize,
    pub json_summary: bool,
}

impl Config {
    /// Builds a validated config from parsed command-line arguments
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let input = cli
            .infile
            .ok_or_else(|| AppError::Config("no input file given".to_string()))?;

        let columns = Columns {
            url: cli.url_col,
            status: cli.status_col,
            content_type: cli.content_type_col,
            location: cli.location_col,
        };
        columns.validate()?;

        if cli.progress_every == 0 {
            return Err(AppError::Config(
                "--progress-every must be at least 1".to_string(),
            ));
        }

        let track_redirects = cli.track_redirects != 0;
        let mut method = match cli.method {
            MethodArg::Get => Method::Get,
            MethodArg::Head => Method::Head,
        };
        // HEAD responses don't carry reliable content-type/history data
        if track_redirects && method == Method::Head {
            tracing::warn!("redirect tracking needs GET requests, ignoring --method head");
            method = Method::Get;
        }

        let output = cli.output.unwrap_or_else(|| output_path(&input));

        Ok(Self {
            input,
            output,
            columns,
            checker: CheckerConfig {
                method,
                track_redirects,
                reconfirm_redirects: !cli.no_reconfirm,
                max_redirects: cli.max_redirects,
                timeout: cli.timeout.map(Duration::from_secs),
            },
            row_offset: DEFAULT_ROW_OFFSET,
            count_first_row_errors: cli.count_first_row,
            progress_every: cli.progress_every,
            json_summary: cli.json_summary,
        })
    }
}

/// `dir/links.xlsx` -> `dir/links_checked.xlsx`
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.xlsx", stem, OUTPUT_SUFFIX))
}
