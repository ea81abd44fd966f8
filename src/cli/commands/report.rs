use crate::cli::commands::parse_reference;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::core::policy::EnginePolicy;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let policy = EnginePolicy::from_config(cfg);
        let reference = parse_reference(date.as_ref())?;

        // one shared `now` keeps the rows comparable
        let now = Local::now().naive_local();

        let summaries = Engine::all_weekly_summaries(&store, reference, now, &policy)?;

        if summaries.is_empty() {
            warning("No workers registered.");
            return Ok(());
        }

        let (week_start, week_end) = (summaries[0].week_start, summaries[0].week_end);
        header(format!("Weekly report, {} → {}", week_start, week_end));

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                width: 4,
            },
            Column {
                header: "Worker".into(),
                width: 24,
            },
            Column {
                header: "Hours".into(),
                width: 8,
            },
            Column {
                header: "Overtime".into(),
                width: 9,
            },
            Column {
                header: "Current order".into(),
                width: 28,
            },
        ]);

        let mut flagged_total = 0usize;

        for s in &summaries {
            flagged_total += s.flagged_entries;

            table.add_row(vec![
                s.worker.id.to_string(),
                s.worker.name.clone(),
                hours2readable(s.total_hours, false),
                if s.is_overtime {
                    hours2readable(s.overtime_hours, true)
                } else {
                    String::new()
                },
                s.current_order
                    .as_ref()
                    .map(|o| o.title.clone())
                    .unwrap_or_default(),
            ]);
        }

        print!("{}", table.render());

        if flagged_total > 0 {
            warning(format!(
                "{} inconsistent entries counted as zero hours; run `repair`.",
                flagged_total
            ));
        }
    }
    Ok(())
}
