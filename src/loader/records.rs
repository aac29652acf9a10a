use crate::errors::{AppError, AppResult};
use crate::models::{RawTable, Record, Schema};
use crate::utils::date::parse_datetime;

/// Typed rows plus the number of rows left out because their date or a
/// grouping value was blank.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Convert the raw table into records using the resolved schema.
///
/// Row numbers in errors count the header as row 1.
pub fn read_records(
    table: &RawTable,
    schema: &Schema,
    date_formats: &[String],
) -> AppResult<LoadedRecords> {
    let mut out = LoadedRecords::default();

    for i in 0..table.rows.len() {
        let file_row = i + 2;

        let raw_date = table.cell(i, schema.date).trim();
        let date = if raw_date.is_empty() {
            None
        } else {
            Some(
                parse_datetime(raw_date, date_formats).ok_or_else(|| AppError::DateParse {
                    row: file_row,
                    column: schema.date_name.clone(),
                    value: raw_date.to_string(),
                })?,
            )
        };

        let keys: Vec<String> = schema
            .group
            .iter()
            .map(|&c| table.cell(i, c).to_string())
            .collect();

        let Some(date) = date else {
            out.skipped += 1;
            continue;
        };
        if keys.iter().any(|k| k.trim().is_empty()) {
            out.skipped += 1;
            continue;
        }

        let hours = parse_hours(table.cell(i, schema.measure)).ok_or_else(|| {
            AppError::InvalidNumber {
                row: file_row,
                column: schema.measure_name.clone(),
                value: table.cell(i, schema.measure).to_string(),
            }
        })?;

        out.records.push(Record { keys, date, hours });
    }

    Ok(out)
}

/// Blank cells count as zero; a lone decimal comma is accepted ("1,5").
fn parse_hours(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let parsed = if s.contains(',') && !s.contains('.') {
        s.replace(',', ".").parse::<f64>()
    } else {
        s.parse::<f64>()
    };

    parsed.ok().filter(|v| v.is_finite())
}
