use crate::cli::commands::parse_at;
use crate::cli::parser::OrderAction;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::work_order::WorkOrderStatus;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(action: &OrderAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        OrderAction::Add { title } => {
            let id = queries::insert_work_order(&pool.conn, title)?;
            ttlog(
                &pool.conn,
                "order",
                &id.to_string(),
                &format!("created '{}'", title),
            )?;
            success(format!("Work order '{}' created with id {}.", title, id));
        }

        OrderAction::List => {
            let orders = queries::load_all_work_orders(&pool.conn)?;

            let mut table = Table::new(vec![
                Column {
                    header: "ID".into(),
                    width: 4,
                },
                Column {
                    header: "Title".into(),
                    width: 28,
                },
                Column {
                    header: "Status".into(),
                    width: 12,
                },
            ]);

            for o in &orders {
                table.add_row(vec![
                    o.id.to_string(),
                    o.title.clone(),
                    o.status.as_str().to_string(),
                ]);
            }

            print!("{}", table.render());
        }

        OrderAction::Status { id, set } => {
            let status = WorkOrderStatus::from_code(set)
                .ok_or_else(|| AppError::InvalidStatus(set.clone()))?;

            if !queries::set_work_order_status(&pool.conn, *id, status)? {
                return Err(AppError::WorkOrderNotFound(*id));
            }

            ttlog(
                &pool.conn,
                "order",
                &id.to_string(),
                &format!("status set to {}", status.as_str()),
            )?;
            success(format!("Work order {} is now {}.", id, status.as_str()));
        }

        OrderAction::Assign { worker, order, at } => {
            let now = Local::now().naive_local();
            let at = parse_at(at.as_ref(), now)?;

            queries::load_worker(&pool.conn, *worker)?
                .ok_or(AppError::WorkerNotFound(*worker))?;

            let label = match order {
                Some(order_id) => {
                    let wo = queries::load_work_order(&pool.conn, *order_id)?
                        .ok_or(AppError::WorkOrderNotFound(*order_id))?;
                    wo.title
                }
                None => "(unassigned)".to_string(),
            };

            queries::insert_assignment(&pool.conn, *worker, *order, at)?;
            ttlog(
                &pool.conn,
                "assign",
                &worker.to_string(),
                &format!("'{}' from {}", label, at.format("%Y-%m-%d %H:%M")),
            )?;
            success(format!(
                "Worker {} assigned to {} from {}.",
                worker,
                label,
                at.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    Ok(())
}
