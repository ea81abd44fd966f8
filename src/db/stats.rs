use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let workers: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM workers", [], |row| row.get(0))?;
    let orders: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_orders", [], |row| row.get(0))?;
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE is_active = 1",
        [],
        |row| row.get(0),
    )?;
    let flagged: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE meta LIKE 'review:%'",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Workers:{} {}{}{}", CYAN, RESET, GREEN, workers, RESET);
    println!("{}• Work orders:{} {}{}{}", CYAN, RESET, GREEN, orders, RESET);
    println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);
    println!("{}• Open sessions:{} {}", CYAN, RESET, open);
    println!("{}• Flagged for review:{} {}", CYAN, RESET, flagged);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Run SQLite's integrity check; returns its verdict line.
pub fn check_db(pool: &mut DbPool) -> rusqlite::Result<String> {
    pool.conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
}
