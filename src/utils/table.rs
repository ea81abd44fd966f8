//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_cell(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Pad on display width, not byte length (worker names are not always ASCII).
fn pad_cell(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    let padding = width.saturating_sub(visible);
    format!("{}{}", s, " ".repeat(padding))
}
