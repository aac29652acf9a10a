use crate::errors::{AppError, AppResult};

/// Column references resolved once against the loaded header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub date: usize,
    pub measure: usize,
    pub group: Vec<usize>,
    pub date_name: String,
    pub measure_name: String,
    pub group_names: Vec<String>,
}

impl Schema {
    /// Resolve the date, measure and grouping columns by exact (case-sensitive) name.
    ///
    /// Fails with `MissingColumns` listing every requested name that is absent,
    /// in request order and without duplicates.
    pub fn resolve(
        headers: &[String],
        date: &str,
        measure: &str,
        group: &[String],
    ) -> AppResult<Self> {
        if group.is_empty() {
            return Err(AppError::EmptyGroup);
        }

        let find = |name: &str| headers.iter().position(|h| h == name);

        let mut missing: Vec<String> = Vec::new();
        for name in std::iter::once(date)
            .chain(std::iter::once(measure))
            .chain(group.iter().map(String::as_str))
        {
            if find(name).is_none() && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }

        if !missing.is_empty() {
            return Err(AppError::MissingColumns(missing));
        }

        // all names are known to be present at this point
        let idx = |name: &str| find(name).unwrap_or_default();

        Ok(Self {
            date: idx(date),
            measure: idx(measure),
            group: group.iter().map(|g| idx(g.as_str())).collect(),
            date_name: date.to_string(),
            measure_name: measure.to_string(),
            group_names: group.to_vec(),
        })
    }
}
