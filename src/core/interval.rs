use crate::models::entry::TimeClockEntry;
use chrono::NaiveDateTime;

/// Elapsed hours for a single entry, given a reference `now` for open
/// sessions.
///
/// - closed entry: clock-out minus clock-in
/// - open session: `now` minus clock-in
/// - dangling entry (no clock-out, not active): zero; the aggregator flags it
///
/// Never negative: a clock-out earlier than its clock-in (device clock skew)
/// yields 0 and is left for the repair pass to mark.
pub fn elapsed_hours(entry: &TimeClockEntry, now: NaiveDateTime) -> f64 {
    let minutes = match entry.clock_out {
        Some(out) => (out - entry.clock_in).num_minutes(),
        None if entry.is_active => (now - entry.clock_in).num_minutes(),
        None => 0,
    };

    (minutes.max(0) as f64) / 60.0
}
