use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::WideTable;
use crate::utils::format_value;
use csv::Writer;
use std::path::Path;

/// Write the wide table as CSV: grouping keys first, then one column per bucket.
/// An existing file is overwritten.
pub fn write_wide_csv(path: &Path, table: &WideTable) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(table.header())?;

    for row in &table.rows {
        let record: Vec<String> = row
            .keys
            .iter()
            .cloned()
            .chain(row.values.iter().map(|v| format_value(*v)))
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    notify_export_success(path);
    Ok(())
}
