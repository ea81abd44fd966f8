use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeClockEntry;
use crate::models::work_order::{WorkOrder, WorkOrderStatus};
use crate::models::worker::Worker;
use crate::utils::time::{format_ts, parse_ts};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Row mapping
// ---------------------------

pub fn map_worker_row(row: &Row) -> Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        position: row.get("position")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

pub fn map_order_row(row: &Row) -> Result<WorkOrder> {
    let status_str: String = row.get("status")?;
    let status = WorkOrderStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(WorkOrder {
        id: row.get("id")?,
        title: row.get("title")?,
        status,
    })
}

pub fn map_entry_row(row: &Row) -> Result<TimeClockEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let in_str: String = row.get("clock_in")?;
    let clock_in = parse_ts(&in_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(in_str.clone())),
        )
    })?;

    let out_str: Option<String> = row.get("clock_out")?;
    let clock_out = match out_str {
        Some(s) => Some(parse_ts(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(TimeClockEntry {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        date,
        clock_in,
        clock_out,
        is_active: row.get::<_, i64>("is_active")? == 1,
        source: row.get("source")?,
        meta: row.get("meta")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------
// Workers
// ---------------------------

pub fn insert_worker(conn: &Connection, name: &str, position: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workers (name, position, active) VALUES (?1, ?2, 1)",
        params![name, position],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_worker(conn: &Connection, id: i64) -> AppResult<Option<Worker>> {
    let worker = conn
        .query_row("SELECT * FROM workers WHERE id = ?1", [id], map_worker_row)
        .optional()?;
    Ok(worker)
}

pub fn load_all_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare("SELECT * FROM workers ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_worker_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn deactivate_worker(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("UPDATE workers SET active = 0 WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

// ---------------------------
// Work orders
// ---------------------------

pub fn insert_work_order(conn: &Connection, title: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_orders (title, status) VALUES (?1, 'created')",
        params![title],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_work_order(conn: &Connection, id: i64) -> AppResult<Option<WorkOrder>> {
    let order = conn
        .query_row("SELECT * FROM work_orders WHERE id = ?1", [id], map_order_row)
        .optional()?;
    Ok(order)
}

pub fn load_all_work_orders(conn: &Connection) -> AppResult<Vec<WorkOrder>> {
    let mut stmt = conn.prepare("SELECT * FROM work_orders ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_order_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_work_order_status(
    conn: &Connection,
    id: i64,
    status: WorkOrderStatus,
) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE work_orders SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(changed > 0)
}

// ---------------------------
// Assignments
// ---------------------------

pub fn insert_assignment(
    conn: &Connection,
    worker_id: i64,
    work_order_id: Option<i64>,
    effective_from: NaiveDateTime,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO assignments (worker_id, work_order_id, effective_from)
         VALUES (?1, ?2, ?3)",
        params![worker_id, work_order_id, format_ts(effective_from)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// The latest assignment fact effective at or before `at`.
/// Ties on `effective_from` break toward the later row.
pub fn load_active_assignment(
    conn: &Connection,
    worker_id: i64,
    at: NaiveDateTime,
) -> AppResult<Option<WorkOrder>> {
    let order_id: Option<Option<i64>> = conn
        .query_row(
            "SELECT work_order_id FROM assignments
             WHERE worker_id = ?1 AND effective_from <= ?2
             ORDER BY effective_from DESC, id DESC
             LIMIT 1",
            params![worker_id, format_ts(at)],
            |row| row.get(0),
        )
        .optional()?;

    match order_id.flatten() {
        Some(id) => load_work_order(conn, id),
        None => Ok(None),
    }
}

// ---------------------------
// Entries
// ---------------------------

pub fn insert_entry(conn: &Connection, e: &TimeClockEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (worker_id, date, clock_in, clock_out, is_active, source, meta, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            e.worker_id,
            e.date_str(),
            format_ts(e.clock_in),
            e.clock_out.map(format_ts),
            if e.is_active { 1 } else { 0 },
            e.source,
            e.meta,
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<TimeClockEntry>> {
    let entry = conn
        .query_row("SELECT * FROM entries WHERE id = ?1", [id], map_entry_row)
        .optional()?;
    Ok(entry)
}

pub fn load_entries_by_worker(conn: &Connection, worker_id: i64) -> AppResult<Vec<TimeClockEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entries
         WHERE worker_id = ?1
         ORDER BY clock_in ASC, id ASC",
    )?;

    let rows = stmt.query_map([worker_id], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Guarded read-modify-write: the update only lands if the stored row still
/// carries the mutable fields the caller read (`before`). Zero affected rows
/// means a concurrent write won the race.
pub fn update_entry_guarded(
    conn: &Connection,
    before: &TimeClockEntry,
    after: &TimeClockEntry,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries
         SET clock_out = ?1, is_active = ?2, source = ?3, meta = ?4
         WHERE id = ?5
           AND clock_out IS ?6
           AND is_active = ?7",
        params![
            after.clock_out.map(format_ts),
            if after.is_active { 1 } else { 0 },
            after.source,
            after.meta,
            before.id,
            before.clock_out.map(format_ts),
            if before.is_active { 1 } else { 0 },
        ],
    )?;

    if changed == 0 {
        return Err(AppError::StoreConflict(before.id));
    }
    Ok(())
}
