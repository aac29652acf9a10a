//! Loader → Aggregator → Reshaper, wired together for one invocation.

use crate::core::aggregate::aggregate;
use crate::core::pivot::{apply_measure, pivot};
use crate::errors::AppResult;
use crate::loader::{load_table, read_records};
use crate::models::{Measure, Schema, SortMode, WideTable};
use std::path::PathBuf;

/// Fully resolved options for one report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub accumulate: String,
    pub date: String,
    pub sort: SortMode,
    pub group: Vec<String>,
    pub measure: Measure,
    pub hours_per_day: f64,
    pub date_formats: Vec<String>,
}

/// Result of the pipeline, ready to be printed and written.
#[derive(Debug, Clone)]
pub struct Report {
    pub table: WideTable,
    /// Rows left out because their date or a grouping value was blank
    pub skipped: usize,
}

pub fn build_report(opts: &ReportOptions) -> AppResult<Report> {
    let raw = load_table(&opts.input)?;
    let schema = Schema::resolve(&raw.headers, &opts.date, &opts.accumulate, &opts.group)?;
    let loaded = read_records(&raw, &schema, &opts.date_formats)?;

    let mut long = aggregate(&loaded.records, opts.sort);
    apply_measure(&mut long, opts.measure, opts.hours_per_day);

    let table = pivot(
        &long,
        &schema.group_names,
        &opts.sort.axis_name(&schema.date_name),
        &opts.measure.display_name(&schema.measure_name),
    )?;

    Ok(Report {
        table,
        skipped: loaded.skipped,
    })
}
