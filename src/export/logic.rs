// src/export/logic.rs

use crate::core::logic::Engine;
use crate::core::policy::EnginePolicy;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::summaries_to_rows;
use crate::store::TimeEntryStore;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};
use chrono::{NaiveDate, NaiveDateTime};
use std::io;

/// High-level export logic: the all-workers weekly report in flat row form.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `reference`: any date inside the week to export
    /// - `now`: the single shared instant for the whole batch
    pub fn export<S: TimeEntryStore + ?Sized>(
        store: &S,
        policy: &EnginePolicy,
        format: ExportFormat,
        file: &str,
        reference: NaiveDate,
        now: NaiveDateTime,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !is_absolute(&path.to_string_lossy()) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, force)?;

        let summaries = Engine::all_weekly_summaries(store, reference, now, policy)?;
        let rows = summaries_to_rows(&summaries);

        if rows.is_empty() {
            warning("⚠️  No workers found; nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}
