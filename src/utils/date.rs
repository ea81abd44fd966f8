use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a week-start day name from configuration ("monday" | "sunday").
pub fn parse_week_start(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Calendar week containing `reference`, as a half-open range
/// `[week_start, week_end)`.
///
/// Purely arithmetic on naive dates, so every entry in one batch is compared
/// against the same boundary regardless of wall-clock timezone.
pub fn week_bounds(reference: NaiveDate, week_starts_on: Weekday) -> (NaiveDate, NaiveDate) {
    let offset = reference.weekday().days_since(week_starts_on);
    let start = reference - Duration::days(offset as i64);
    (start, start + Duration::days(7))
}

/// The first midnight strictly after `ts` (end-of-day boundary used by the
/// repair closing rule).
pub fn next_midnight(ts: NaiveDateTime) -> NaiveDateTime {
    let next_day = ts.date() + Duration::days(1);
    next_day.and_hms_opt(0, 0, 0).unwrap_or(ts)
}
