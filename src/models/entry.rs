use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Marker prefix written into `meta` when an entry needs operator review.
pub const REVIEW_PREFIX: &str = "review:";

/// The atomic time-clock fact: one clock-in, optionally paired with a
/// clock-out.
///
/// Invariants (enforced by the clock and repair write paths):
/// - at most one entry per worker has `is_active = true`
/// - if `clock_out` is present, `is_active` is false and `clock_out >= clock_in`
/// - `clock_in` is immutable after creation
#[derive(Debug, Clone, Serialize)]
pub struct TimeClockEntry {
    pub id: i64,
    pub worker_id: i64,
    pub date: NaiveDate, // ⇔ entries.date (TEXT "YYYY-MM-DD"), day of clock-in
    pub clock_in: NaiveDateTime, // ⇔ entries.clock_in (TEXT "YYYY-MM-DD HH:MM")
    pub clock_out: Option<NaiveDateTime>, // ⇔ entries.clock_out (nullable)
    pub is_active: bool, // ⇔ entries.is_active (INT 0/1)

    pub source: String,     // ⇔ entries.source ('cli' | 'repair')
    pub meta: String,       // ⇔ entries.meta (review markers etc.)
    pub created_at: String, // ⇔ entries.created_at (TEXT, ISO8601)
}

impl TimeClockEntry {
    /// High-level constructor for entries created by a clock-in.
    /// - `date` is derived from the clock-in instant
    /// - the entry starts open (`is_active = true`, no clock-out)
    /// - `created_at` is stamped from the caller-supplied `now`
    pub fn open(worker_id: i64, clock_in: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self {
            id: 0,
            worker_id,
            date: clock_in.date(),
            clock_in,
            clock_out: None,
            is_active: true,
            source: "cli".to_string(),
            meta: String::new(),
            created_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Open session: active with no clock-out yet.
    pub fn is_open(&self) -> bool {
        self.is_active && self.clock_out.is_none()
    }

    /// Inconsistent shape: no clock-out but not active either.
    /// Counts as zero hours and is a repair candidate.
    pub fn is_dangling(&self) -> bool {
        !self.is_active && self.clock_out.is_none()
    }

    /// Clock skew artifact: clock-out earlier than clock-in.
    pub fn has_negative_duration(&self) -> bool {
        match self.clock_out {
            Some(out) => out < self.clock_in,
            None => false,
        }
    }

    pub fn needs_review(&self) -> bool {
        self.meta.starts_with(REVIEW_PREFIX)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        match self.clock_out {
            Some(out) => out.format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}
