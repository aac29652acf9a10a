use crate::models::SortMode;
use std::path::{Path, PathBuf};

/// Derive the output file next to `input`:
/// `<stem>_<sort>_<group1_group2>.csv`, with spaces in group names turned into '-'.
pub fn output_path(input: &Path, sort: SortMode, group: &[String]) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let groups = group.join("_").replace(' ', "-");

    input.with_file_name(format!("{stem}_{sort}_{groups}.csv"))
}
