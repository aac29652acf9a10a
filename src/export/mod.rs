// src/export/mod.rs

mod csv_writer;
mod naming;

pub use csv_writer::write_wide_csv;
pub use naming::output_path;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for written reports.
pub(crate) fn notify_export_success(path: &Path) {
    success(format!("file saved as {}", path.display()));
}
