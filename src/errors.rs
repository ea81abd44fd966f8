//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store unavailable: {0}")]
    Store(String),

    #[error("Conflicting concurrent write on entry {0}")]
    StoreConflict(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid work order status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Unknown worker: {0}")]
    WorkerNotFound(i64),

    #[error("Unknown work order: {0}")]
    WorkOrderNotFound(i64),

    #[error("Worker {0} already has an open session (entry {1}); clock out first or run `repair`")]
    AlreadyClockedIn(i64, i64),

    #[error("Worker {0} has no open session to clock out of")]
    NotClockedIn(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
