use crate::cli::parser::WorkerAction;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(action: &WorkerAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        WorkerAction::Add { name, position } => {
            let id = queries::insert_worker(&pool.conn, name, position)?;
            ttlog(
                &pool.conn,
                "worker",
                &id.to_string(),
                &format!("registered '{}'", name),
            )?;
            success(format!("Worker '{}' registered with id {}.", name, id));
        }

        WorkerAction::List => {
            let workers = queries::load_all_workers(&pool.conn)?;

            let mut table = Table::new(vec![
                Column {
                    header: "ID".into(),
                    width: 4,
                },
                Column {
                    header: "Name".into(),
                    width: 24,
                },
                Column {
                    header: "Position".into(),
                    width: 16,
                },
                Column {
                    header: "Active".into(),
                    width: 6,
                },
            ]);

            for w in &workers {
                table.add_row(vec![
                    w.id.to_string(),
                    w.name.clone(),
                    w.position.clone(),
                    if w.active { "yes".into() } else { "no".into() },
                ]);
            }

            print!("{}", table.render());
        }

        WorkerAction::Deactivate { id } => {
            if queries::deactivate_worker(&pool.conn, *id)? {
                ttlog(&pool.conn, "worker", &id.to_string(), "deactivated")?;
                success(format!("Worker {} marked inactive.", id));
            } else {
                warning(format!("No worker with id {}.", id));
            }
        }
    }

    Ok(())
}
