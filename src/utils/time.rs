//! Time utilities: parsing and formatting clock instants.

use chrono::NaiveDateTime;

/// Storage format for clock instants (naive local time, minute precision).
pub const TS_FMT: &str = "%Y-%m-%d %H:%M";

pub fn parse_ts(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TS_FMT).ok()
}

pub fn format_ts(ts: NaiveDateTime) -> String {
    ts.format(TS_FMT).to_string()
}
