use crate::cli::commands::parse_reference;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::core::policy::EnginePolicy;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::summary::WorkerWeeklySummary;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_overtime};
use crate::utils::formatting::bold;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { worker, date } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let policy = EnginePolicy::from_config(cfg);
        let reference = parse_reference(date.as_ref())?;
        let now = Local::now().naive_local();

        let summary = Engine::weekly_summary(&store, *worker, reference, now, &policy)?;
        render_summary(&summary);
    }
    Ok(())
}

pub(crate) fn render_summary(s: &WorkerWeeklySummary) {
    header(format!(
        "Weekly summary — {} (worker {}), {} → {}",
        s.worker.name, s.worker.id, s.week_start, s.week_end
    ));

    let mut table = Table::new(vec![
        Column {
            header: "Work order".into(),
            width: 28,
        },
        Column {
            header: "Status".into(),
            width: 12,
        },
        Column {
            header: "Hours".into(),
            width: 8,
        },
        Column {
            header: "Active".into(),
            width: 6,
        },
    ]);

    for group in &s.orders {
        table.add_row(vec![
            group.work_order.title.clone(),
            group.work_order.status.as_str().to_string(),
            hours2readable(group.hours_worked, false),
            if group.is_current {
                "yes".into()
            } else {
                String::new()
            },
        ]);
    }

    if s.unattributed_hours > 0.0 {
        table.add_row(vec![
            "(unattributed)".into(),
            String::new(),
            hours2readable(s.unattributed_hours, false),
            String::new(),
        ]);
    }

    print!("{}", table.render());
    println!();
    println!("Total:    {}", bold(&hours2readable(s.total_hours, false)));
    println!(
        "Overtime: {}{}{}",
        color_for_overtime(s.overtime_hours),
        hours2readable(s.overtime_hours, true),
        RESET
    );

    if let Some(order) = &s.current_order {
        info(format!("Currently clocked in on '{}'.", order.title));
    }

    if s.flagged_entries > 0 {
        warning(format!(
            "{} inconsistent entries counted as zero hours; run `repair`.",
            s.flagged_entries
        ));
    }
}
