use crate::errors::{AppError, AppResult};
use crate::models::RawTable;
use crate::utils::date::excel_serial_to_datetime;
use calamine::{Data, Reader, open_workbook_auto};
use std::io;
use std::path::Path;

/// Read the first worksheet of an xls/xlsx workbook; row one is the header.
pub(crate) fn read_first_sheet(path: &Path) -> AppResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::from(io::Error::other("Workbook contains no sheets")))??;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(first) => first.iter().map(cell_to_string).collect(),
        None => return Ok(RawTable::default()),
    };

    let rows = rows
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<_>>())
        .filter(|r| r.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(RawTable { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => float_to_string(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

fn float_to_string(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
