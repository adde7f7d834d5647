// src/error.rs
// =============================================================================
// Fatal errors: the ones that stop the whole run.
//
// Per-row failures (no URL, refused connection, ...) are NOT errors here.
// They are ordinary values of `CheckResult` and get written into the sheet.
// Only things that leave us with nothing to save end up in `AppError`.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// The input workbook could not be read
    #[error("Could not open {}", path.display())]
    Open {
        path: PathBuf,
        source: umya_spreadsheet::reader::xlsx::XlsxError,
    },

    /// The annotated workbook could not be written
    #[error("Could not save records to {}", path.display())]
    Persist {
        path: PathBuf,
        source: umya_spreadsheet::writer::xlsx::XlsxError,
    },

    /// The URL column lies outside the sheet
    #[error("URL column {column} is out of range: the sheet only has {max} column(s)")]
    InvalidColumn { column: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not create HTTP client")]
    Client(#[from] reqwest::Error),
}
