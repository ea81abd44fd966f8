use crate::core::attribution;
use crate::core::interval;
use crate::core::overtime;
use crate::core::policy::EnginePolicy;
use crate::errors::AppResult;
use crate::models::summary::{WorkOrderSummary, WorkerWeeklySummary};
use crate::models::worker::Worker;
use crate::store::TimeEntryStore;
use crate::utils::date::week_bounds;
use chrono::{NaiveDate, NaiveDateTime};

/// Build one worker's summary for the calendar week containing `reference`.
///
/// All inputs are explicit: the snapshot comes from `store`, the single
/// shared `now` from the caller. Entries inside `[week_start, week_end)` are
/// measured with the interval calculator, attributed to the work order
/// active at their clock-in, and accumulated per order. Inconsistent entries
/// (dangling or negative-duration) count zero hours and only bump the
/// flagged counter, so one bad entry never corrupts the payroll total.
pub fn weekly_summary<S: TimeEntryStore + ?Sized>(
    store: &S,
    worker: &Worker,
    reference: NaiveDate,
    now: NaiveDateTime,
    policy: &EnginePolicy,
) -> AppResult<WorkerWeeklySummary> {
    let (week_start, week_end) = week_bounds(reference, policy.week_starts_on);

    let mut entries = store.fetch_entries(worker.id)?;
    entries.sort_by_key(|e| e.clock_in);

    let mut total_hours = 0.0;
    let mut unattributed_hours = 0.0;
    let mut orders: Vec<WorkOrderSummary> = Vec::new();
    let mut flagged_entries = 0usize;
    let mut current_order = None;

    for entry in &entries {
        let in_window = entry.date >= week_start && entry.date < week_end;
        let is_open = entry.is_open();

        if !in_window && !is_open {
            continue;
        }

        let resolved = attribution::resolve(store, entry)?;

        if is_open {
            current_order = resolved.clone();
        }

        if !in_window {
            continue;
        }

        if entry.is_dangling() || entry.has_negative_duration() {
            // zero hours; kept visible through the flagged count
            flagged_entries += 1;
            continue;
        }

        let hours = interval::elapsed_hours(entry, now);
        total_hours += hours;

        match resolved {
            Some(order) => {
                match orders.iter_mut().find(|s| s.work_order.id == order.id) {
                    Some(existing) => {
                        existing.hours_worked += hours;
                        existing.is_current |= is_open;
                    }
                    None => orders.push(WorkOrderSummary {
                        work_order: order,
                        hours_worked: hours,
                        is_current: is_open,
                    }),
                }
            }
            None => unattributed_hours += hours,
        }
    }

    let assessment = overtime::evaluate(total_hours, policy.overtime_threshold_hours);

    Ok(WorkerWeeklySummary {
        worker: worker.clone(),
        week_start,
        week_end,
        total_hours,
        orders,
        unattributed_hours,
        is_overtime: assessment.is_overtime,
        overtime_hours: assessment.overtime_hours,
        current_order,
        flagged_entries,
    })
}

/// Summaries for every worker in the store, all sharing one `reference` and
/// one `now` so the rows of a report are comparable.
pub fn all_weekly_summaries<S: TimeEntryStore + ?Sized>(
    store: &S,
    reference: NaiveDate,
    now: NaiveDateTime,
    policy: &EnginePolicy,
) -> AppResult<Vec<WorkerWeeklySummary>> {
    let workers = store.fetch_all_workers()?;

    let mut out = Vec::with_capacity(workers.len());
    for worker in &workers {
        out.push(weekly_summary(store, worker, reference, now, policy)?);
    }
    Ok(out)
}
