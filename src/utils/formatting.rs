//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render fractional hours as "HHh MMm", e.g. 8.5 → "08h 30m".
/// With `want_sign` positive values get an explicit "+".
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    let sign = if hours > 0.0 && want_sign {
        "+"
    } else if hours < 0.0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, h, m)
}
