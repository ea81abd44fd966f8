use crate::core::aggregator;
use crate::core::policy::EnginePolicy;
use crate::core::repair::{self, RepairReport};
use crate::errors::{AppError, AppResult};
use crate::models::summary::WorkerWeeklySummary;
use crate::store::TimeEntryStore;
use chrono::{NaiveDate, NaiveDateTime};

/// The engine surface consumed by the CLI and export layers.
///
/// Every operation is a synchronous batch over the store snapshot it reads,
/// parameterized by one shared `now`; recomputing `now` per worker would
/// break cross-worker comparability of a report.
pub struct Engine;

impl Engine {
    pub fn weekly_summary<S: TimeEntryStore + ?Sized>(
        store: &S,
        worker_id: i64,
        reference: NaiveDate,
        now: NaiveDateTime,
        policy: &EnginePolicy,
    ) -> AppResult<WorkerWeeklySummary> {
        let worker = store
            .fetch_worker(worker_id)?
            .ok_or(AppError::WorkerNotFound(worker_id))?;

        aggregator::weekly_summary(store, &worker, reference, now, policy)
    }

    pub fn all_weekly_summaries<S: TimeEntryStore + ?Sized>(
        store: &S,
        reference: NaiveDate,
        now: NaiveDateTime,
        policy: &EnginePolicy,
    ) -> AppResult<Vec<WorkerWeeklySummary>> {
        aggregator::all_weekly_summaries(store, reference, now, policy)
    }

    pub fn repair_anomalies<S: TimeEntryStore + ?Sized>(
        store: &mut S,
        now: NaiveDateTime,
        policy: &EnginePolicy,
    ) -> AppResult<RepairReport> {
        repair::repair_anomalies(store, now, policy)
    }
}
