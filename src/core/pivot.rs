//! Measure substitution and long → wide reshaping.

use crate::errors::{AppError, AppResult};
use crate::models::{Bucket, LongRow, Measure, WideRow, WideTable};
use std::collections::{BTreeMap, BTreeSet};

/// Replace every hour total with the requested measure.
/// Must run before [`pivot`] so the wide cells are already in that unit.
pub fn apply_measure(rows: &mut [LongRow], measure: Measure, hours_per_day: f64) {
    for row in rows {
        row.value = measure.convert(row.value, hours_per_day);
    }
}

/// Pivot long-form rows into a wide table.
///
/// Rows are the distinct key tuples in ascending order, columns the
/// distinct buckets in ascending order; absent cells are 0. A second value
/// for an existing (keys, bucket) cell is rejected.
pub fn pivot(
    long: &[LongRow],
    index_names: &[String],
    axis_name: &str,
    measure_name: &str,
) -> AppResult<WideTable> {
    let columns: Vec<Bucket> = long
        .iter()
        .map(|r| r.bucket)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: BTreeMap<&[String], BTreeMap<Bucket, f64>> = BTreeMap::new();

    for r in long {
        let row = cells.entry(r.keys.as_slice()).or_default();
        if row.insert(r.bucket, r.value).is_some() {
            return Err(AppError::Reshape(format!(
                "{} '{}' appears more than once for ({}); \
                 weeks from different ISO years share this number, try --sort week",
                axis_name,
                r.bucket,
                r.keys.join(", ")
            )));
        }
    }

    let rows = cells
        .into_iter()
        .map(|(keys, values)| WideRow {
            keys: keys.to_vec(),
            values: columns
                .iter()
                .map(|b| values.get(b).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    Ok(WideTable {
        index_names: index_names.to_vec(),
        axis_name: axis_name.to_string(),
        measure_name: measure_name.to_string(),
        columns,
        rows,
    })
}
