use crate::cli::commands::parse_at;
use crate::cli::parser::ClockAction;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::log::ttlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::hours2readable;
use chrono::Local;

pub fn handle(action: &ClockAction, cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;
    let now = Local::now().naive_local();

    match action {
        ClockAction::In { worker, at } => {
            let at = parse_at(at.as_ref(), now)?;
            let entry = ClockLogic::clock_in(&mut store, *worker, at, now)?;

            ttlog(
                &store.pool.conn,
                "clock-in",
                &entry.id.to_string(),
                &format!("worker {} at {}", worker, entry.clock_in_str()),
            )?;
            success(format!(
                "Worker {} clocked in at {} (entry {}).",
                worker,
                entry.clock_in_str(),
                entry.id
            ));
        }

        ClockAction::Out { worker, at } => {
            let at = parse_at(at.as_ref(), now)?;
            let entry = ClockLogic::clock_out(&mut store, *worker, at)?;

            let worked = match entry.clock_out {
                Some(out) => (out - entry.clock_in).num_minutes() as f64 / 60.0,
                None => 0.0,
            };

            ttlog(
                &store.pool.conn,
                "clock-out",
                &entry.id.to_string(),
                &format!("worker {} at {}", worker, entry.clock_out_str()),
            )?;
            success(format!(
                "Worker {} clocked out at {} ({} worked).",
                worker,
                entry.clock_out_str(),
                hours2readable(worked, false)
            ));
        }
    }

    Ok(())
}
