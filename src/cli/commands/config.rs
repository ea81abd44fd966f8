use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::env;
use std::fs;
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            let content = fs::read_to_string(&path)
                .map_err(|_| AppError::Config(format!("cannot read {}", path.display())))?;
            println!("{}", content);
            return Ok(());
        }

        if *edit_config {
            return edit(editor.as_deref());
        }

        info("Nothing to do: use --print or --edit.");
    }
    Ok(())
}

fn edit(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();

    let editor = editor
        .map(str::to_string)
        .or_else(|| env::var("EDITOR").ok())
        .or_else(|| env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = ProcessCommand::new(&editor).arg(&path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!("editor '{}' exited with error", editor)));
    }
    Ok(())
}
