use rtempo::cli::parser::normalize_args;
use rtempo::config::Config;
use rtempo::export::output_path;
use rtempo::models::{FileFormat, SortMode};
use rtempo::utils::format_value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[test]
fn test_output_path_strips_last_extension_and_joins_groups() {
    let out = output_path(
        Path::new("/data/tempo.export.xlsx"),
        SortMode::CalendarWeek,
        &["Username".to_string(), "Work package".to_string()],
    );
    assert_eq!(
        out,
        PathBuf::from("/data/tempo.export_calendarweek_Username_Work-package.csv")
    );
}

#[test]
fn test_output_path_relative_input() {
    let out = output_path(Path::new("hours.csv"), SortMode::Week, &["Username".to_string()]);
    assert_eq!(out, PathBuf::from("hours_week_Username.csv"));
}

#[test]
fn test_file_format_detection() {
    assert_eq!(FileFormat::from_path(Path::new("a.csv")).ok(), Some(FileFormat::Csv));
    assert_eq!(FileFormat::from_path(Path::new("a.CSV")).ok(), Some(FileFormat::Csv));
    assert_eq!(
        FileFormat::from_path(Path::new("a.xls")).ok(),
        Some(FileFormat::Spreadsheet)
    );
    assert_eq!(
        FileFormat::from_path(Path::new("dir.v2/a.xlsx")).ok(),
        Some(FileFormat::Spreadsheet)
    );
    assert!(FileFormat::from_path(Path::new("a.json")).is_err());
    assert!(FileFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(8.0), "8");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(7.5), "7.5");
    assert_eq!(format_value(0.1 + 0.2), "0.3");
}

#[test]
fn test_normalize_args_rewrites_legacy_flag_only() {
    let args: Vec<OsString> = ["rtempo", "-pd", "f.csv", "--", "-pd"]
        .iter()
        .map(OsString::from)
        .collect();

    let out = normalize_args(args);
    let out: Vec<&str> = out.iter().map(|a| a.to_str().expect("utf8")).collect();

    assert_eq!(out, vec!["rtempo", "--persondays", "f.csv", "--", "-pd"]);
}

#[test]
fn test_config_defaults_and_partial_yaml() {
    let cfg = Config::from_yaml("").expect("empty config");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.accumulate, "Hours");
    assert_eq!(cfg.date, "Work date");
    assert_eq!(cfg.group, vec!["Username"]);
    assert_eq!(cfg.hours_per_day, 8.0);

    let cfg = Config::from_yaml("group: [Team, Username]\n").expect("partial config");
    assert_eq!(cfg.group, vec!["Team", "Username"]);
    assert_eq!(cfg.accumulate, "Hours");
}

#[test]
fn test_config_rejects_non_positive_hours_per_day() {
    assert!(Config::from_yaml("hours_per_day: 0\n").is_err());
}

#[test]
fn test_config_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg = Config::load(Some(dir.path().join("absent.conf").as_path())).expect("load");
    assert_eq!(cfg, Config::default());
}
