//! Table rendering utilities for CLI outputs.

use crate::models::WideTable;
use crate::utils::format_value;
use ansi_term::Style;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern is valid")
});

/// Visible width of `s`, ignoring ANSI escapes.
fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(ANSI.replace_all(s, "").as_ref())
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
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
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let bold = Style::new().bold();
        for col in &self.columns {
            let text = pad(&col.header, col.width, col.align);
            out.push_str(&format!("{} ", bold.paint(text)));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width, col.align));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(s)));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

/// Build the console view of a pivoted report.
pub fn wide_table(table: &WideTable) -> Table {
    let columns = table
        .header()
        .into_iter()
        .enumerate()
        .map(|(i, header)| Column {
            width: visible_width(&header),
            header,
            align: if i < table.index_names.len() {
                Align::Left
            } else {
                Align::Right
            },
        })
        .collect();

    let mut out = Table::new(columns);
    for row in &table.rows {
        out.add_row(
            row.keys
                .iter()
                .cloned()
                .chain(row.values.iter().map(|v| format_value(*v)))
                .collect(),
        );
    }
    out
}
