use crate::models::Bucket;

/// A loaded input file: header row plus string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cell at (`row`, `col`), or "" for short rows.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Long-form row: one (grouping-key combination, bucket) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub keys: Vec<String>,
    pub bucket: Bucket,
    pub value: f64,
}

/// Wide-form row: one grouping-key combination, one value per bucket column.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub keys: Vec<String>,
    pub values: Vec<f64>,
}

/// Pivoted table: grouping keys as row index, buckets as columns.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub index_names: Vec<String>,
    pub axis_name: String,
    pub measure_name: String,
    pub columns: Vec<Bucket>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Header row: index names followed by bucket labels.
    pub fn header(&self) -> Vec<String> {
        self.index_names
            .iter()
            .cloned()
            .chain(self.columns.iter().map(Bucket::label))
            .collect()
    }
}
