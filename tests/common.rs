#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small Tempo-like export used by most tests.
///
/// Week buckets (date - 7 days, closing Monday):
///   2024-01-15 → 2024-01-08, 2024-01-16 → 2024-01-15,
///   2024-01-22 → 2024-01-15, 2024-03-05 → 2024-03-04
pub const SAMPLE_CSV: &str = "\
Username,Project,Work date,Hours,Description
alice,Apollo,2024-01-15 09:00,4,Design
alice,Apollo,2024-01-16 09:00,3.5,Review
bob,Apollo,2024-01-15,8,Build
alice,Zeus,2024-01-22,2,Meeting
bob,Zeus,2024-03-05,6,Ops
";

pub const SAMPLE_TOTAL: f64 = 23.5;

/// rtempo binary with a config path that never exists, so the user's own
/// ~/.rtempo/rtempo.conf cannot leak into the test.
pub fn rtempo(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtempo");
    cmd.arg("--config").arg(dir.join("no-such-config.conf"));
    cmd
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write `content` to `dir/name` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn write_sample(dir: &Path) -> PathBuf {
    write_file(dir, "timesheet.csv", SAMPLE_CSV)
}

/// File names currently present in `dir`, sorted
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Sum of every numeric cell past the first `index_cols` columns of a CSV file
pub fn csv_cell_total(content: &str, index_cols: usize) -> f64 {
    content
        .lines()
        .skip(1)
        .flat_map(|line| {
            line.split(',')
                .skip(index_cols)
                .map(|v| v.parse::<f64>().expect("numeric cell"))
                .collect::<Vec<_>>()
        })
        .sum()
}
