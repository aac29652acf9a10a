use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Bucketing policy selected with `--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Week,
    CalendarWeek,
    Month,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Week => "week",
            SortMode::CalendarWeek => "calendarweek",
            SortMode::Month => "month",
        }
    }

    /// Name of the column axis in the wide table
    pub fn axis_name(&self, date_column: &str) -> String {
        match self {
            SortMode::Week => date_column.to_string(),
            SortMode::CalendarWeek => "Week number".to_string(),
            SortMode::Month => "Month".to_string(),
        }
    }
}

impl FromStr for SortMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(SortMode::Week),
            "calendarweek" => Ok(SortMode::CalendarWeek),
            "month" => Ok(SortMode::Month),
            _ => Err(AppError::UnsupportedSort(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
