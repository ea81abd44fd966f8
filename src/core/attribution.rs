use crate::errors::AppResult;
use crate::models::entry::TimeClockEntry;
use crate::models::work_order::WorkOrder;
use crate::store::TimeEntryStore;

/// Resolve which work order an entry's hours belong to: the order the worker
/// was assigned to at the moment of clock-in.
///
/// One entry attributes to exactly one order; a worker switching orders
/// mid-session is expected to clock out and back in, producing two entries.
/// `None` means the worker was unassigned at clock-in; such hours stay in
/// the weekly total but join no per-order group.
pub fn resolve<S: TimeEntryStore + ?Sized>(
    store: &S,
    entry: &TimeClockEntry,
) -> AppResult<Option<WorkOrder>> {
    store.fetch_active_assignment(entry.worker_id, entry.clock_in)
}
