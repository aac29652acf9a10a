//! Date utilities: parsing export date cells and converting Excel serials.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Date-time layouts tried in order after any configured ones.
const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d/%b/%y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M",
];

/// Date-only layouts, midnight is assumed.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%b/%y", "%m/%d/%Y", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse a date cell, trying `extra` formats first, then the built-in ones.
///
/// Extra formats may describe a date-time or a bare date.
pub fn parse_datetime(s: &str, extra: &[String]) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in extra {
        if let Some(dt) = parse_with(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .chain(DATE_FORMATS.iter())
        .find_map(|fmt| parse_with(s, fmt))
}

fn parse_with(s: &str, fmt: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, fmt)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Last serial Excel can display (9999-12-31).
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

/// Convert an Excel serial number (days since 1899-12-30) into a date-time.
/// Serials outside Excel's date range yield `None`.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !(0.0..EXCEL_MAX_SERIAL + 1.0).contains(&serial) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let days = serial.trunc() as i64;
    let secs = ((serial - serial.trunc()) * 86400.0).round() as i64;

    epoch.checked_add_signed(Duration::try_days(days)? + Duration::try_seconds(secs)?)
}
