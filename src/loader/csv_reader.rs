use crate::errors::AppResult;
use crate::models::RawTable;
use csv::ReaderBuilder;
use std::path::Path;

/// Read a comma-separated file with a header row.
/// Short rows are padded with empty cells up to the header width.
pub(crate) fn read_csv(path: &Path) -> AppResult<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}
