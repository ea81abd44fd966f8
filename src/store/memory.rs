//! In-memory store: the deterministic fixture behind the engine tests and a
//! drop-in `TimeEntryStore` for embedders that manage persistence themselves.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeClockEntry;
use crate::models::work_order::{Assignment, WorkOrder, WorkOrderStatus};
use crate::models::worker::Worker;
use crate::store::TimeEntryStore;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    workers: Vec<Worker>,
    work_orders: Vec<WorkOrder>,
    assignments: Vec<Assignment>,
    entries: BTreeMap<i64, TimeClockEntry>,
    next_entry_id: i64,
    next_assignment_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_worker(&mut self, name: &str, position: &str) -> i64 {
        let id = self.workers.len() as i64 + 1;
        self.workers.push(Worker::new(id, name, position));
        id
    }

    pub fn add_work_order(&mut self, title: &str, status: WorkOrderStatus) -> i64 {
        let id = self.work_orders.len() as i64 + 1;
        let mut order = WorkOrder::new(id, title);
        order.status = status;
        self.work_orders.push(order);
        id
    }

    /// Record an assignment fact; `work_order_id = None` unassigns.
    pub fn assign(
        &mut self,
        worker_id: i64,
        work_order_id: Option<i64>,
        effective_from: NaiveDateTime,
    ) {
        self.next_assignment_id += 1;
        self.assignments.push(Assignment {
            id: self.next_assignment_id,
            worker_id,
            work_order_id,
            effective_from,
        });
    }

    /// Direct entry mutation, bypassing the guarded write path.
    /// Test hook for simulating concurrent external writes.
    pub fn overwrite_entry(&mut self, entry: TimeClockEntry) {
        self.entries.insert(entry.id, entry);
    }
}

impl TimeEntryStore for MemoryStore {
    fn fetch_worker(&self, worker_id: i64) -> AppResult<Option<Worker>> {
        Ok(self.workers.iter().find(|w| w.id == worker_id).cloned())
    }

    fn fetch_all_workers(&self) -> AppResult<Vec<Worker>> {
        Ok(self.workers.clone())
    }

    fn fetch_entries(&self, worker_id: i64) -> AppResult<Vec<TimeClockEntry>> {
        Ok(self
            .entries
            .values()
            .filter(|e| e.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn fetch_entry(&self, entry_id: i64) -> AppResult<Option<TimeClockEntry>> {
        Ok(self.entries.get(&entry_id).cloned())
    }

    fn fetch_active_assignment(
        &self,
        worker_id: i64,
        at: NaiveDateTime,
    ) -> AppResult<Option<WorkOrder>> {
        let fact = self
            .assignments
            .iter()
            .filter(|a| a.worker_id == worker_id && a.effective_from <= at)
            .max_by_key(|a| (a.effective_from, a.id));

        let order_id = match fact.and_then(|a| a.work_order_id) {
            Some(id) => id,
            None => return Ok(None),
        };

        Ok(self.work_orders.iter().find(|o| o.id == order_id).cloned())
    }

    fn insert_entry(&mut self, entry: &TimeClockEntry) -> AppResult<i64> {
        self.next_entry_id += 1;
        let mut stored = entry.clone();
        stored.id = self.next_entry_id;
        self.entries.insert(stored.id, stored);
        Ok(self.next_entry_id)
    }

    fn update_entry(&mut self, before: &TimeClockEntry, after: &TimeClockEntry) -> AppResult<()> {
        let stored = self
            .entries
            .get_mut(&before.id)
            .ok_or(AppError::Store(format!("no entry {}", before.id)))?;

        if stored.clock_out != before.clock_out || stored.is_active != before.is_active {
            return Err(AppError::StoreConflict(before.id));
        }

        *stored = after.clone();
        Ok(())
    }
}
