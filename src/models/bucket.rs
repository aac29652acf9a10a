use chrono::NaiveDate;
use std::fmt;

/// A discrete time period used as the column axis of the wide table.
///
/// Within one report every bucket is of the same variant, so the derived
/// ordering is the natural ascending order of the bucket value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    /// Closing Monday of a (shifted) week
    WeekStart(NaiveDate),
    /// ISO calendar week, 1..=53
    CalendarWeek(u32),
    /// Month of the year, 1..=12
    Month(u32),
}

impl Bucket {
    pub fn label(&self) -> String {
        match self {
            Bucket::WeekStart(d) => d.format("%Y-%m-%d").to_string(),
            Bucket::CalendarWeek(w) => w.to_string(),
            Bucket::Month(m) => format!("{m:02}"),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
