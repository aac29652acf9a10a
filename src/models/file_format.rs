use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Input formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Spreadsheet,
}

impl FileFormat {
    /// Detect the format from the last extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xls" | "xlsx" | "xlsm" | "ods" => Ok(FileFormat::Spreadsheet),
            _ => Err(AppError::UnsupportedFormat(ext)),
        }
    }
}
