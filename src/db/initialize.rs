use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema. Every statement is idempotent, so re-running `init`
/// against an existing database is safe.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS workers (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             name      TEXT NOT NULL,
             position  TEXT NOT NULL DEFAULT '',
             active    INTEGER NOT NULL DEFAULT 1
         );

         CREATE TABLE IF NOT EXISTS work_orders (
             id      INTEGER PRIMARY KEY AUTOINCREMENT,
             title   TEXT NOT NULL,
             status  TEXT NOT NULL DEFAULT 'created'
         );

         CREATE TABLE IF NOT EXISTS assignments (
             id             INTEGER PRIMARY KEY AUTOINCREMENT,
             worker_id      INTEGER NOT NULL REFERENCES workers(id),
             work_order_id  INTEGER REFERENCES work_orders(id),
             effective_from TEXT NOT NULL
         );
         CREATE INDEX IF NOT EXISTS idx_assignments_worker
             ON assignments(worker_id, effective_from);

         CREATE TABLE IF NOT EXISTS entries (
             id         INTEGER PRIMARY KEY AUTOINCREMENT,
             worker_id  INTEGER NOT NULL REFERENCES workers(id),
             date       TEXT NOT NULL,
             clock_in   TEXT NOT NULL,
             clock_out  TEXT,
             is_active  INTEGER NOT NULL DEFAULT 0,
             source     TEXT NOT NULL DEFAULT 'cli',
             meta       TEXT NOT NULL DEFAULT '',
             created_at TEXT NOT NULL DEFAULT ''
         );
         CREATE INDEX IF NOT EXISTS idx_entries_worker_date
             ON entries(worker_id, date);

         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL DEFAULT '',
             message   TEXT NOT NULL DEFAULT ''
         );",
    )?;

    Ok(())
}
