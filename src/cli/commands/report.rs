use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{ReportOptions, build_report};
use crate::errors::{AppError, AppResult};
use crate::export::{output_path, write_wide_csv};
use crate::models::{Measure, SortMode};
use crate::ui::messages::{header, info, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::wide_table;

/// Handle the default command: aggregate, print and save the report.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let opts = resolve_options(cli, cfg)?;

    info(format!(
        "Converting file {}, sorting by {}, grouping by {}",
        cli.file,
        opts.sort,
        opts.group.join(", ")
    ));
    println!();

    let report = build_report(&opts)?;

    if report.skipped > 0 {
        warning(format!(
            "{} row(s) skipped: blank '{}' or grouping value",
            report.skipped, opts.date
        ));
    }
    if report.table.rows.is_empty() {
        warning("No rows to aggregate.");
    }

    header(format!(
        "{} by {}",
        report.table.measure_name, report.table.axis_name
    ));
    print!("{}", wide_table(&report.table).render());
    println!();

    let out = output_path(&opts.input, opts.sort, &opts.group);
    write_wide_csv(&out, &report.table)?;

    Ok(())
}

/// Merge command-line flags over the configured defaults.
pub fn resolve_options(cli: &Cli, cfg: &Config) -> AppResult<ReportOptions> {
    let sort: SortMode = match cli.sort.as_deref() {
        Some(s) => s.parse()?,
        None => return Err(AppError::UnsupportedSort(String::new())),
    };

    let group = if cli.group.is_empty() {
        cfg.group.clone()
    } else {
        cli.group.clone()
    };

    Ok(ReportOptions {
        input: expand_tilde(&cli.file),
        accumulate: cli.accumulate.clone().unwrap_or_else(|| cfg.accumulate.clone()),
        date: cli.date.clone().unwrap_or_else(|| cfg.date.clone()),
        sort,
        group,
        measure: Measure::from_flag(cli.person_days),
        hours_per_day: cfg.hours_per_day,
        date_formats: cfg.date_formats.clone(),
    })
}
