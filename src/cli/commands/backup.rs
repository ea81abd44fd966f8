use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::backup(cfg, file, *compress)?;

        let pool = DbPool::new(&cfg.database)?;
        ttlog(&pool.conn, "backup", "", &format!("backup to {}", file))?;
    }
    Ok(())
}
