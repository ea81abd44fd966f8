use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // overwrite needs an explicit yes
        if dest.exists() && !confirm_overwrite(&dest)? {
            println!("❌ Backup cancelled by user.");
            return Ok(());
        }

        fs::copy(src, &dest)?;
        println!("✅ Backup created: {}", dest.display());

        if compress {
            let compressed = compress_backup(&dest)?;
            if compressed != dest {
                fs::remove_file(&dest)?;
                println!("📦 Compressed backup: {}", compressed.display());
            }
        }

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    use std::io::{Write, stdin, stdout};

    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        dest.display()
    );

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Gzip the copied database file next to itself (`<name>.gz`).
fn compress_backup(dest: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.gz", dest.display()));

    let mut input = fs::File::open(dest)?;
    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());

    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    Ok(gz_path)
}
