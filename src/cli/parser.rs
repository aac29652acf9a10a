use clap::Parser;
use std::ffi::OsString;

/// Command-line interface definition for rtempo
/// Turns a time-tracking export into a pivoted hours summary
#[derive(Parser, Debug)]
#[command(
    name = "rtempo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize time-tracking exports (CSV/XLS/XLSX) by week, calendar week or month",
    long_about = None
)]
pub struct Cli {
    /// Input file (.csv, .xls or .xlsx)
    pub file: String,

    /// Column whose values are summed
    #[arg(
        short = 'a',
        long = "accumulate",
        value_name = "COLUMN",
        help = "Column to accumulate [default: Hours]"
    )]
    pub accumulate: Option<String>,

    /// Column holding the work date
    #[arg(
        short = 'd',
        long = "date",
        value_name = "COLUMN",
        help = "Date column [default: Work date]"
    )]
    pub date: Option<String>,

    /// Bucketing policy: week, calendarweek or month
    #[arg(
        short = 's',
        long = "sort",
        value_name = "MODE",
        required_unless_present = "columns",
        help = "Sort by week, calendarweek or month"
    )]
    pub sort: Option<String>,

    /// Grouping column; repeat to group by several columns (order is kept)
    #[arg(
        short = 'g',
        long = "group",
        value_name = "COLUMN",
        help = "Group by column, repeatable [default: Username]"
    )]
    pub group: Vec<String>,

    /// Report person days (hours / 8, one decimal) instead of hours
    #[arg(long = "persondays", help = "Get output in person days (also -pd)")]
    pub person_days: bool,

    /// Print the columns of the input file and exit
    #[arg(short = 'c', long = "columns", help = "Print all columns of the file")]
    pub columns: bool,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE", hide = true)]
    pub config: Option<String>,
}

/// Rewrite the legacy single-dash `-pd` flag into `--persondays`.
///
/// Arguments after a `--` terminator are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                arg
            } else if arg == "-pd" {
                OsString::from("--persondays")
            } else {
                arg
            }
        })
        .collect()
}
