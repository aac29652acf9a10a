//! Unified application error type.
//! Every stage of the pipeline (loader, core, export) returns AppError so
//! the single top-level handler in main.rs can report and terminate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("The file format '{0}' is currently not supported.")]
    UnsupportedFormat(String),

    #[error("Following columns are not present: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("'--sort {0}' is currently not supported.")]
    UnsupportedSort(String),

    #[error("At least one grouping column is required")]
    EmptyGroup,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date in column '{column}' at row {row}: '{value}'")]
    DateParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid number in column '{column}' at row {row}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Reshape error: {0}")]
    Reshape(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
