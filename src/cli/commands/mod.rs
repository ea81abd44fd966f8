pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod order;
pub mod repair;
pub mod report;
pub mod summary;
pub mod worker;

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::time::parse_ts;
use chrono::{NaiveDate, NaiveDateTime};

/// Parse an optional "YYYY-MM-DD HH:MM" argument, defaulting to `now`.
pub(crate) fn parse_at(input: Option<&String>, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    match input {
        Some(s) => parse_ts(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(now),
    }
}

/// Parse an optional "YYYY-MM-DD" reference date, defaulting to today.
pub(crate) fn parse_reference(input: Option<&String>) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(crate::utils::date::today()),
    }
}
