//! SQLite-backed implementation of the store collaborator.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::TimeClockEntry;
use crate::models::work_order::WorkOrder;
use crate::models::worker::Worker;
use crate::store::TimeEntryStore;
use chrono::NaiveDateTime;

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self { pool })
    }
}

impl TimeEntryStore for SqliteStore {
    fn fetch_worker(&self, worker_id: i64) -> AppResult<Option<Worker>> {
        queries::load_worker(&self.pool.conn, worker_id)
    }

    fn fetch_all_workers(&self) -> AppResult<Vec<Worker>> {
        queries::load_all_workers(&self.pool.conn)
    }

    fn fetch_entries(&self, worker_id: i64) -> AppResult<Vec<TimeClockEntry>> {
        queries::load_entries_by_worker(&self.pool.conn, worker_id)
    }

    fn fetch_entry(&self, entry_id: i64) -> AppResult<Option<TimeClockEntry>> {
        queries::load_entry(&self.pool.conn, entry_id)
    }

    fn fetch_active_assignment(
        &self,
        worker_id: i64,
        at: NaiveDateTime,
    ) -> AppResult<Option<WorkOrder>> {
        queries::load_active_assignment(&self.pool.conn, worker_id, at)
    }

    fn insert_entry(&mut self, entry: &TimeClockEntry) -> AppResult<i64> {
        queries::insert_entry(&self.pool.conn, entry)
    }

    fn update_entry(&mut self, before: &TimeClockEntry, after: &TimeClockEntry) -> AppResult<()> {
        queries::update_entry_guarded(&self.pool.conn, before, after)
    }
}
