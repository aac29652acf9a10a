//! Loader: reads an export file into memory and turns it into typed records.

mod csv_reader;
mod records;
mod spreadsheet;

pub use records::{LoadedRecords, read_records};

use crate::errors::AppResult;
use crate::models::{FileFormat, RawTable};
use std::path::Path;

/// Read `path` into a [`RawTable`], choosing the reader from the extension.
pub fn load_table(path: &Path) -> AppResult<RawTable> {
    match FileFormat::from_path(path)? {
        FileFormat::Csv => csv_reader::read_csv(path),
        FileFormat::Spreadsheet => spreadsheet::read_first_sheet(path),
    }
}

/// Column names of `path`, without any validation.
pub fn list_columns(path: &Path) -> AppResult<Vec<String>> {
    Ok(load_table(path)?.headers)
}
