use crate::config::Config;
use crate::utils::date::parse_week_start;
use chrono::Weekday;

/// The knobs one batch computation runs under. Built once per call from the
/// configuration; the engine itself holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct EnginePolicy {
    /// Weekly hours above which the excess is overtime.
    pub overtime_threshold_hours: f64,
    /// Longest shift considered sane; open sessions older than this are
    /// anomalies and the bound caps synthesized clock-outs.
    pub max_shift_hours: i64,
    pub week_starts_on: Weekday,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: 40.0,
            max_shift_hours: 16,
            week_starts_on: Weekday::Mon,
        }
    }
}

impl EnginePolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            overtime_threshold_hours: cfg.overtime_threshold_hours,
            max_shift_hours: cfg.max_shift_hours,
            week_starts_on: parse_week_start(&cfg.week_starts_on).unwrap_or(Weekday::Mon),
        }
    }
}
