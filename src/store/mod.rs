//! Store collaborator boundary.
//!
//! The engine never touches persistence directly: it reads workers, entries
//! and assignment facts through this trait and writes corrections back
//! through it. Implementations: [`crate::db::store::SqliteStore`] for the
//! CLI, [`memory::MemoryStore`] for deterministic tests.

pub mod memory;

use crate::errors::AppResult;
use crate::models::entry::TimeClockEntry;
use crate::models::work_order::WorkOrder;
use crate::models::worker::Worker;
use chrono::NaiveDateTime;

pub trait TimeEntryStore {
    fn fetch_worker(&self, worker_id: i64) -> AppResult<Option<Worker>>;

    fn fetch_all_workers(&self) -> AppResult<Vec<Worker>>;

    /// All time-clock entries ever recorded for one worker.
    fn fetch_entries(&self, worker_id: i64) -> AppResult<Vec<TimeClockEntry>>;

    fn fetch_entry(&self, entry_id: i64) -> AppResult<Option<TimeClockEntry>>;

    /// The work order the worker was assigned to at instant `at`: the latest
    /// assignment fact effective at or before `at`. `None` when the worker
    /// was unassigned.
    fn fetch_active_assignment(
        &self,
        worker_id: i64,
        at: NaiveDateTime,
    ) -> AppResult<Option<WorkOrder>>;

    /// Persist a new entry; returns its assigned id.
    fn insert_entry(&mut self, entry: &TimeClockEntry) -> AppResult<i64>;

    /// Read-modify-write of a single entry. `before` carries the mutable
    /// fields the caller read; if the stored row no longer matches them
    /// (a concurrent clock-out slipped in), the write is rejected with
    /// [`crate::errors::AppError::StoreConflict`] and nothing changes.
    fn update_entry(&mut self, before: &TimeClockEntry, after: &TimeClockEntry) -> AppResult<()>;
}
