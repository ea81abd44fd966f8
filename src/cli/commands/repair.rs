use crate::config::Config;
use crate::core::logic::Engine;
use crate::core::policy::EnginePolicy;
use crate::core::repair::RepairOutcome;
use crate::db::log::ttlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;
    let policy = EnginePolicy::from_config(cfg);
    let now = Local::now().naive_local();

    let report = Engine::repair_anomalies(&mut store, now, &policy)?;

    for action in &report.actions {
        let label = format!(
            "entry {} (worker {}, {})",
            action.entry_id,
            action.worker_id,
            action.kind.as_str()
        );

        match action.outcome {
            RepairOutcome::Fixed => match action.closed_at {
                Some(at) => info(format!("{}: closed at {}", label, at.format("%Y-%m-%d %H:%M"))),
                None => info(format!("{}: closed", label)),
            },
            RepairOutcome::Flagged => {
                warning(format!("{}: zeroed and marked for manual review", label))
            }
            RepairOutcome::Abandoned => {
                warning(format!("{}: lost the write race twice, left as-is", label))
            }
            RepairOutcome::Skipped => {
                info(format!("{}: already resolved by a concurrent write", label))
            }
        }
    }

    ttlog(
        &store.pool.conn,
        "repair",
        "",
        &format!(
            "fixed {}, flagged {}",
            report.entries_fixed, report.entries_flagged_for_review
        ),
    )?;

    success(format!(
        "Repair complete: {} fixed, {} flagged for review.",
        report.entries_fixed, report.entries_flagged_for_review
    ));
    Ok(())
}
