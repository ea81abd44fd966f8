use crate::cli::commands::parse_reference;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy::EnginePolicy;
use crate::db::log::ttlog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let policy = EnginePolicy::from_config(cfg);
        let reference = parse_reference(date.as_ref())?;
        let now = Local::now().naive_local();

        ExportLogic::export(&store, &policy, format.clone(), file, reference, now, *force)?;

        ttlog(
            &store.pool.conn,
            "export",
            format.as_str(),
            &format!("weekly report to {}", file),
        )?;
    }
    Ok(())
}
