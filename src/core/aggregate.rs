//! Date-windowed grouping of records into long-form rows.

use crate::models::{Bucket, LongRow, Record, SortMode};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Days a work date is moved back before weekly bucketing.
const REPORTING_LAG_DAYS: i64 = 7;

/// Weekly bucket of a work date.
///
/// The date is moved back one week, then assigned to the week that closes
/// on the first Monday on or after it. That Monday is the bucket value;
/// a Monday therefore maps to itself (2024-01-15 → 2024-01-08).
pub fn week_bucket(dt: NaiveDateTime) -> NaiveDate {
    let shifted = dt.date() - Duration::days(REPORTING_LAG_DAYS);
    let to_monday = (7 - shifted.weekday().num_days_from_monday()) % 7;
    shifted + Duration::days(i64::from(to_monday))
}

/// ISO calendar week (1..=53) of the weekly bucket.
pub fn calendar_week_bucket(dt: NaiveDateTime) -> u32 {
    week_bucket(dt).iso_week().week()
}

/// Month (1..=12) of the unshifted work date.
pub fn month_bucket(dt: NaiveDateTime) -> u32 {
    dt.month()
}

/// Sum hours per (grouping keys, bucket).
///
/// Only observed combinations are emitted. Rows come out ordered by the
/// bucket's date and then by key. In calendar-week mode the sums are
/// taken per weekly bucket first and relabelled afterwards, so two weeks
/// of different years sharing a number stay separate rows.
pub fn aggregate(records: &[Record], mode: SortMode) -> Vec<LongRow> {
    match mode {
        SortMode::Week => sum_by(records, |r| Bucket::WeekStart(week_bucket(r.date))),
        SortMode::Month => sum_by(records, |r| Bucket::Month(month_bucket(r.date))),
        SortMode::CalendarWeek => {
            let mut rows = sum_by(records, |r| Bucket::WeekStart(week_bucket(r.date)));
            for row in &mut rows {
                if let Bucket::WeekStart(monday) = row.bucket {
                    row.bucket = Bucket::CalendarWeek(monday.iso_week().week());
                }
            }
            rows
        }
    }
}

fn sum_by<F>(records: &[Record], bucket_of: F) -> Vec<LongRow>
where
    F: Fn(&Record) -> Bucket,
{
    let mut sums: BTreeMap<(Bucket, Vec<String>), f64> = BTreeMap::new();

    for r in records {
        *sums.entry((bucket_of(r), r.keys.clone())).or_insert(0.0) += r.hours;
    }

    sums.into_iter()
        .map(|((bucket, keys), value)| LongRow { keys, bucket, value })
        .collect()
}
