use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeClockEntry;
use crate::store::TimeEntryStore;
use chrono::NaiveDateTime;

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Open a session for `worker_id` at instant `at`.
    ///
    /// Enforces the single-open-session invariant up front: a worker with an
    /// open entry cannot clock in again, they either clock out or run
    /// `repair`.
    pub fn clock_in<S: TimeEntryStore + ?Sized>(
        store: &mut S,
        worker_id: i64,
        at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> AppResult<TimeClockEntry> {
        let worker = store
            .fetch_worker(worker_id)?
            .ok_or(AppError::WorkerNotFound(worker_id))?;

        let entries = store.fetch_entries(worker.id)?;
        if let Some(open) = entries.iter().find(|e| e.is_open()) {
            return Err(AppError::AlreadyClockedIn(worker.id, open.id));
        }

        let mut entry = TimeClockEntry::open(worker.id, at, now);
        entry.id = store.insert_entry(&entry)?;
        Ok(entry)
    }

    /// Close the worker's open session at instant `at` through the guarded
    /// write path.
    pub fn clock_out<S: TimeEntryStore + ?Sized>(
        store: &mut S,
        worker_id: i64,
        at: NaiveDateTime,
    ) -> AppResult<TimeClockEntry> {
        let worker = store
            .fetch_worker(worker_id)?
            .ok_or(AppError::WorkerNotFound(worker_id))?;

        let entries = store.fetch_entries(worker.id)?;
        let open = entries
            .iter()
            .filter(|e| e.is_open())
            .max_by_key(|e| (e.clock_in, e.id))
            .ok_or(AppError::NotClockedIn(worker.id))?;

        if at < open.clock_in {
            return Err(AppError::InvalidTime(format!(
                "clock-out {} is earlier than clock-in {}",
                at.format("%Y-%m-%d %H:%M"),
                open.clock_in_str()
            )));
        }

        let mut after = open.clone();
        after.clock_out = Some(at);
        after.is_active = false;

        store.update_entry(open, &after)?;
        Ok(after)
    }
}
