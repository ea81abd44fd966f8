use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats::{check_db, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *show_info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            let verdict = check_db(&mut pool)?;
            if verdict == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {}", verdict));
            }
        }

        if *vacuum {
            pool.conn.execute("VACUUM", [])?;
            success("Database optimized (VACUUM).");
        }

        if !*show_info && !*check && !*vacuum {
            info("Nothing to do: use --info, --check or --vacuum.");
        }
    }
    Ok(())
}
