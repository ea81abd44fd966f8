// src/export/model.rs

use crate::models::summary::WorkerWeeklySummary;
use serde::Serialize;

/// Flat row shape for the weekly report export: one row per
/// (worker, work order) group, plus an "(unattributed)" row when hours
/// resolved to no order, plus a blank-order row for workers with no hours
/// so every worker appears in the payroll file.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub worker_id: i64,
    pub worker: String,
    pub week_start: String,
    pub week_end: String,
    pub work_order: String,
    pub order_status: String,
    pub hours: f64,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub flagged_entries: usize,
}

pub(crate) fn summaries_to_rows(summaries: &[WorkerWeeklySummary]) -> Vec<SummaryExport> {
    let mut rows = Vec::new();

    for s in summaries {
        let base = SummaryExport {
            worker_id: s.worker.id,
            worker: s.worker.name.clone(),
            week_start: s.week_start.format("%Y-%m-%d").to_string(),
            week_end: s.week_end.format("%Y-%m-%d").to_string(),
            work_order: String::new(),
            order_status: String::new(),
            hours: 0.0,
            total_hours: s.total_hours,
            overtime_hours: s.overtime_hours,
            flagged_entries: s.flagged_entries,
        };

        let before = rows.len();

        for group in &s.orders {
            rows.push(SummaryExport {
                work_order: group.work_order.title.clone(),
                order_status: group.work_order.status.as_str().to_string(),
                hours: group.hours_worked,
                ..base.clone()
            });
        }

        if s.unattributed_hours > 0.0 {
            rows.push(SummaryExport {
                work_order: "(unattributed)".to_string(),
                hours: s.unattributed_hours,
                ..base.clone()
            });
        }

        if rows.len() == before {
            rows.push(base);
        }
    }

    rows
}
