//! Anomaly detection and repair for time-clock entries ("fix clock issues").
//!
//! Finds entries that would corrupt aggregation and closes or flags them
//! through the ordinary entry write path, so repaired rows satisfy the same
//! invariants as a normal clock-out. Running repair twice with no new
//! activity is a no-op.

use crate::core::policy::EnginePolicy;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{REVIEW_PREFIX, TimeClockEntry};
use crate::store::TimeEntryStore;
use crate::utils::date::next_midnight;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Open session older than the max-shift bound.
    StaleOpen,
    /// More than one open session for the same worker; all but the
    /// most-recently-opened one are anomalous.
    DuplicateOpen,
    /// Clock-out earlier than clock-in.
    NegativeDuration,
    /// No clock-out but not active either.
    MissingClockOut,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::StaleOpen => "stale-open",
            AnomalyKind::DuplicateOpen => "duplicate-open",
            AnomalyKind::NegativeDuration => "negative-duration",
            AnomalyKind::MissingClockOut => "missing-clock-out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Anomaly {
    pub entry: TimeClockEntry,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Closed with a synthesized clock-out.
    Fixed,
    /// Neutralized (zero duration) and marked for manual review.
    Flagged,
    /// Lost the write race twice; left untouched for the next run.
    Abandoned,
    /// A concurrent external write already resolved it.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct RepairAction {
    pub entry_id: i64,
    pub worker_id: i64,
    pub kind: AnomalyKind,
    pub closed_at: Option<NaiveDateTime>,
    pub outcome: RepairOutcome,
}

#[derive(Debug, Default)]
pub struct RepairReport {
    pub entries_fixed: usize,
    pub entries_flagged_for_review: usize,
    pub actions: Vec<RepairAction>,
}

/// Scan one worker's entries for the anomaly classes.
pub fn detect(entries: &[TimeClockEntry], now: NaiveDateTime, policy: &EnginePolicy) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    let mut open: Vec<&TimeClockEntry> = entries.iter().filter(|e| e.is_open()).collect();
    open.sort_by_key(|e| (e.clock_in, e.id));

    // duplicates: every open session except the most recently opened
    if open.len() > 1 {
        for entry in &open[..open.len() - 1] {
            anomalies.push(Anomaly {
                entry: (*entry).clone(),
                kind: AnomalyKind::DuplicateOpen,
            });
        }
    }

    // the surviving open session may still be stale
    if let Some(latest) = open.last()
        && now - latest.clock_in > Duration::hours(policy.max_shift_hours)
    {
        anomalies.push(Anomaly {
            entry: (*latest).clone(),
            kind: AnomalyKind::StaleOpen,
        });
    }

    for entry in entries {
        if entry.has_negative_duration() {
            anomalies.push(Anomaly {
                entry: entry.clone(),
                kind: AnomalyKind::NegativeDuration,
            });
        } else if entry.is_dangling() {
            anomalies.push(Anomaly {
                entry: entry.clone(),
                kind: AnomalyKind::MissingClockOut,
            });
        }
    }

    anomalies
}

/// Detect and correct anomalies across all workers, most-recent-first.
///
/// Each correction is a guarded read-modify-write; on a conflicting
/// concurrent write the entry is re-read and retried once, then abandoned
/// and reported rather than fought over.
pub fn repair_anomalies<S: TimeEntryStore + ?Sized>(
    store: &mut S,
    now: NaiveDateTime,
    policy: &EnginePolicy,
) -> AppResult<RepairReport> {
    let workers = store.fetch_all_workers()?;

    let mut anomalies = Vec::new();
    for worker in &workers {
        let entries = store.fetch_entries(worker.id)?;
        anomalies.extend(detect(&entries, now, policy));
    }

    anomalies.sort_by(|a, b| b.entry.clock_in.cmp(&a.entry.clock_in));

    let mut report = RepairReport::default();
    for anomaly in &anomalies {
        let action = apply_one(store, anomaly, policy)?;

        match action.outcome {
            RepairOutcome::Fixed => report.entries_fixed += 1,
            RepairOutcome::Flagged => report.entries_flagged_for_review += 1,
            // still inconsistent, still needs an operator
            RepairOutcome::Abandoned => report.entries_flagged_for_review += 1,
            RepairOutcome::Skipped => {}
        }

        report.actions.push(action);
    }

    Ok(report)
}

/// Closing instant for a session left open: end of the clock-in day or the
/// max-shift bound past clock-in, whichever comes first.
fn closing_time(clock_in: NaiveDateTime, policy: &EnginePolicy) -> NaiveDateTime {
    let end_of_day = next_midnight(clock_in);
    let bound = clock_in + Duration::hours(policy.max_shift_hours);
    end_of_day.min(bound)
}

fn corrected(entry: &TimeClockEntry, kind: AnomalyKind, policy: &EnginePolicy) -> TimeClockEntry {
    let mut after = entry.clone();
    after.is_active = false;
    after.source = "repair".to_string();

    match kind {
        AnomalyKind::StaleOpen | AnomalyKind::DuplicateOpen => {
            after.clock_out = Some(closing_time(entry.clock_in, policy));
            after.meta = format!("auto-closed:{}", kind.as_str());
        }
        AnomalyKind::NegativeDuration | AnomalyKind::MissingClockOut => {
            // never silently assign time: zero the duration and hand it to a human
            after.clock_out = Some(entry.clock_in);
            after.meta = format!("{}{}", REVIEW_PREFIX, kind.as_str());
        }
    }

    after
}

fn outcome_for(kind: AnomalyKind) -> RepairOutcome {
    match kind {
        AnomalyKind::StaleOpen | AnomalyKind::DuplicateOpen => RepairOutcome::Fixed,
        AnomalyKind::NegativeDuration | AnomalyKind::MissingClockOut => RepairOutcome::Flagged,
    }
}

fn still_anomalous(entry: &TimeClockEntry, kind: AnomalyKind) -> bool {
    match kind {
        AnomalyKind::StaleOpen | AnomalyKind::DuplicateOpen => entry.is_open(),
        AnomalyKind::NegativeDuration => entry.has_negative_duration(),
        AnomalyKind::MissingClockOut => entry.is_dangling(),
    }
}

fn apply_one<S: TimeEntryStore + ?Sized>(
    store: &mut S,
    anomaly: &Anomaly,
    policy: &EnginePolicy,
) -> AppResult<RepairAction> {
    let after = corrected(&anomaly.entry, anomaly.kind, policy);

    let mut action = RepairAction {
        entry_id: anomaly.entry.id,
        worker_id: anomaly.entry.worker_id,
        kind: anomaly.kind,
        closed_at: after.clock_out,
        outcome: outcome_for(anomaly.kind),
    };

    match store.update_entry(&anomaly.entry, &after) {
        Ok(()) => Ok(action),
        Err(AppError::StoreConflict(_)) => {
            // retry once against the freshly read entry
            let fresh = match store.fetch_entry(anomaly.entry.id)? {
                Some(e) => e,
                None => {
                    action.outcome = RepairOutcome::Skipped;
                    action.closed_at = None;
                    return Ok(action);
                }
            };

            if !still_anomalous(&fresh, anomaly.kind) {
                action.outcome = RepairOutcome::Skipped;
                action.closed_at = None;
                return Ok(action);
            }

            let retry = corrected(&fresh, anomaly.kind, policy);
            action.closed_at = retry.clock_out;

            match store.update_entry(&fresh, &retry) {
                Ok(()) => Ok(action),
                Err(AppError::StoreConflict(_)) => {
                    action.outcome = RepairOutcome::Abandoned;
                    action.closed_at = None;
                    Ok(action)
                }
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}
