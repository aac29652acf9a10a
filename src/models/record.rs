use chrono::NaiveDateTime;

/// One typed input row: grouping-key values, work date and hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub keys: Vec<String>,
    pub date: NaiveDateTime,
    pub hours: f64,
}
