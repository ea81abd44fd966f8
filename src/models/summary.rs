use crate::models::work_order::WorkOrder;
use crate::models::worker::Worker;
use chrono::NaiveDate;
use serde::Serialize;

/// Hours one worker logged against one work order within one week.
/// Derived on every query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct WorkOrderSummary {
    pub work_order: WorkOrder, // status/title captured at summary time
    pub hours_worked: f64,
    pub is_current: bool, // the worker's currently active order
}

/// One worker's payroll-relevant week.
///
/// `total_hours` is summed over all in-window entries independent of
/// grouping; grouped hours plus `unattributed_hours` always add back up to
/// it (entries with no resolvable work order count toward the total but
/// appear in no group).
#[derive(Debug, Clone, Serialize)]
pub struct WorkerWeeklySummary {
    pub worker: Worker,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate, // exclusive
    pub total_hours: f64,
    pub orders: Vec<WorkOrderSummary>, // ordered by first clock-in
    pub unattributed_hours: f64,
    pub is_overtime: bool,
    pub overtime_hours: f64,
    pub current_order: Option<WorkOrder>,
    pub flagged_entries: usize, // inconsistent entries counted as 0 hours
}
