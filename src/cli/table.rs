//! Table formatting utilities for CLI list commands
//!
//! Every list command builds [`TableRow`]s of typed [`CellValue`]s and hands
//! them to a [`TableFormatter`], which renders TSV, CSV, Markdown or bare ids.
//!
//! # Text Wrapping
//!
//! - Use `TableConfig::with_wrap(width)` to enable word-wrapped multi-line rows
//! - CSV and ID formats remain single-line for pipability

use chrono::NaiveDate;
use console::style;

use crate::cli::helpers::{escape_csv, format_money, truncate_str};
use crate::cli::OutputFormat;
use crate::core::entity::{Department, Priority};
use crate::core::labels::{department_label, humanize, status_color};

/// Configuration for table output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Maximum width for text columns before wrapping (None = truncate instead)
    pub wrap_width: Option<usize>,
    /// Show summary line after table (e.g., "5 project(s) found")
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            wrap_width: None,
            show_summary: true,
        }
    }
}

impl TableConfig {
    /// Create config with text wrapping enabled at the specified width
    pub fn with_wrap(width: usize) -> Self {
        Self {
            wrap_width: Some(width),
            show_summary: true,
        }
    }

    /// Create config optimized for piping (no wrapping, no summary)
    pub fn for_pipe() -> Self {
        Self {
            wrap_width: None,
            show_summary: false,
        }
    }
}

/// Wrap text to fit within a maximum width, breaking at word boundaries
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.chars().count() <= max_width || max_width < 5 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let fits = current.chars().count() + 1 + word.chars().count() <= max_width;
        if !current.is_empty() && fits {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // Force-break words longer than the line
        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(max_width).peekable();
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                current = piece;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Record id (cyan)
    Id(String),
    /// Plain text, truncated to the column
    Text(String),
    /// Display label for a status, colored by the raw status value
    Status { value: String, label: String },
    /// Department, shown by its label
    Department(Department),
    /// Priority with color coding
    Priority(Priority),
    /// Calendar date; `None` shows as "TBD"
    Date(Option<NaiveDate>),
    /// Integer count
    Number(i64),
    /// 0-100 progress
    Percent(u8),
    /// Currency amount in rand
    Money(f64),
    /// Empty/placeholder
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Status cell whose label is the humanized value itself
    pub fn status(value: &str) -> Self {
        CellValue::Status {
            value: value.to_string(),
            label: humanize(value),
        }
    }

    /// Status cell with an explicit display label
    pub fn status_labelled(value: &str, label: &str) -> Self {
        CellValue::Status {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => format!("{:<width$}", style(id).cyan(), width = width),
            CellValue::Text(s) => {
                let truncated = truncate_str(s, width.saturating_sub(2));
                format!("{:<width$}", truncated, width = width)
            }
            CellValue::Status { value, label } => {
                let styled = status_color(value).style().apply_to(label);
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Priority(priority) => {
                let s = priority.to_string();
                let styled = match priority {
                    Priority::Low => style(s).dim(),
                    Priority::Medium => style(s).white(),
                    Priority::High => style(s).yellow(),
                    Priority::Urgent => style(s).red().bold(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Number(n) => format!("{:>width$}", n, width = width),
            CellValue::Percent(p) => format!("{:>width$}", format!("{}%", p), width = width),
            CellValue::Money(m) => format!("{:>width$}", format_money(*m), width = width),
            CellValue::Empty => format!("{:<width$}", "-", width = width),
            other => format!("{:<width$}", other.raw(), width = width),
        }
    }

    /// Format for CSV output (RFC 4180, no colors)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Status { value, .. } => value.clone(),
            CellValue::Department(d) => d.to_string(),
            CellValue::Date(None) => String::new(),
            CellValue::Percent(p) => p.to_string(),
            CellValue::Money(m) => format!("{:.2}", m),
            CellValue::Empty => String::new(),
            other => escape_csv(&other.raw()),
        }
    }

    /// Format for Markdown output (no colors, escaped pipes)
    pub fn format_md(&self) -> String {
        let raw = match self {
            CellValue::Empty => "-".to_string(),
            other => other.raw(),
        };
        raw.replace('|', "\\|")
    }

    /// Get raw string value (no formatting, for ID output)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) => s.clone(),
            CellValue::Status { label, .. } => label.clone(),
            CellValue::Department(d) => department_label(*d).to_string(),
            CellValue::Priority(p) => p.to_string(),
            CellValue::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            CellValue::Date(None) => "TBD".to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Percent(p) => format!("{}%", p),
            CellValue::Money(m) => format_money(*m),
            CellValue::Empty => String::new(),
        }
    }

    /// Get the display width of this cell's content (for dynamic column sizing)
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Empty => 1,
            other => other.raw().chars().count(),
        }
    }
}

/// Column definition with header label and width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of cell values for table output
pub struct TableRow {
    pub id: String,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter that outputs rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
    config: TableConfig,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
            config: TableConfig::default(),
        }
    }

    /// Configure the formatter with custom settings
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Output rows in the specified format (`Auto` means TSV)
    pub fn output<I>(&self, rows: I, format: OutputFormat)
    where
        I: IntoIterator<Item = TableRow>,
    {
        let rows: Vec<TableRow> = rows.into_iter().collect();
        print!("{}", self.render(&rows, format));
    }

    /// Render rows to a string
    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> String {
        let lines = match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => self.render_md(rows),
            OutputFormat::Id => rows.iter().map(|r| r.id.clone()).collect(),
            _ => self.render_tsv(rows),
        };
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let max_content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                // +2 leaves room for truncate_str's ellipsis
                let natural = col.header.len().max(max_content.saturating_add(2));
                natural.min(col.width)
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[TableRow]) -> Vec<String> {
        let widths = self.calculate_widths(rows);
        let mut lines = Vec::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", style(col.header).bold(), width = *w))
            .collect();
        lines.push(header.join(" ").trim_end().to_string());

        let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        lines.push("-".repeat(total_width));

        for row in rows {
            match self.config.wrap_width {
                Some(wrap) => lines.extend(self.tsv_row_wrapped(row, &widths, wrap)),
                None => lines.push(self.tsv_row_truncated(row, &widths)),
            }
        }

        if self.config.show_summary {
            lines.push(String::new());
            lines.push(format!(
                "{} {}(s) found.",
                style(rows.len()).cyan(),
                self.entity_name
            ));
        }
        lines
    }

    fn tsv_row_truncated(&self, row: &TableRow, widths: &[usize]) -> String {
        let parts: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .map(|(col, w)| match row.get(col.key) {
                Some(value) => value.format_tsv(*w),
                None => format!("{:<width$}", "-", width = *w),
            })
            .collect();
        parts.join(" ").trim_end().to_string()
    }

    fn tsv_row_wrapped(&self, row: &TableRow, widths: &[usize], wrap_width: usize) -> Vec<String> {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|col| match row.get(col.key) {
                Some(value @ CellValue::Text(_)) => wrap_text(&value.raw(), wrap_width),
                Some(value) => vec![value.raw()],
                None => vec!["-".to_string()],
            })
            .collect();

        let height = cells.iter().map(|c| c.len()).max().unwrap_or(1);
        let mut lines: Vec<String> = (0..height)
            .map(|line| {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(widths)
                    .map(|(cell, w)| {
                        let content = cell.get(line).map(String::as_str).unwrap_or("");
                        format!("{:<width$}", content, width = *w)
                    })
                    .collect();
                parts.join(" ").trim_end().to_string()
            })
            .collect();

        // Blank line between multi-line rows for readability
        if height > 1 {
            lines.push(String::new());
        }
        lines
    }

    fn render_csv(&self, rows: &[TableRow]) -> Vec<String> {
        let mut lines = Vec::new();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.key).collect();
        lines.push(headers.join(","));

        for row in rows {
            let values: Vec<String> = self
                .columns
                .iter()
                .map(|col| row.get(col.key).map(|v| v.format_csv()).unwrap_or_default())
                .collect();
            lines.push(values.join(","));
        }
        lines
    }

    fn render_md(&self, rows: &[TableRow]) -> Vec<String> {
        let mut lines = Vec::new();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        lines.push(format!("| {} |", headers.join(" | ")));

        let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
        lines.push(format!("|{}|", separators.join("|")));

        for row in rows {
            let values: Vec<String> = self
                .columns
                .iter()
                .map(|col| {
                    row.get(col.key)
                        .map(|v| v.format_md())
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect();
            lines.push(format!("| {} |", values.join(" | ")));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("id", "ID", 10),
        ColumnDef::new("name", "NAME", 30),
        ColumnDef::new("status", "STATUS", 14),
    ];

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::new("proj-001")
                .cell("id", CellValue::Id("proj-001".to_string()))
                .cell("name", CellValue::text("Mustang, Boss 429"))
                .cell(
                    "status",
                    CellValue::status_labelled("in_progress", "In Progress"),
                ),
            TableRow::new("proj-006")
                .cell("id", CellValue::Id("proj-006".to_string()))
                .cell("name", CellValue::text("Mach 1 | Assessment")),
        ]
    }

    #[test]
    fn test_cell_value_text_format() {
        let cell = CellValue::text("Hello World");
        assert!(cell.format_tsv(20).contains("Hello World"));
        assert_eq!(cell.format_csv(), "Hello World");
        assert_eq!(cell.format_md(), "Hello World");
    }

    #[test]
    fn test_status_cell_uses_raw_value_for_csv() {
        let cell = CellValue::status_labelled("on_hold", "On Hold");
        assert_eq!(cell.format_csv(), "on_hold");
        assert_eq!(cell.format_md(), "On Hold");
        assert_eq!(CellValue::status("pending_pickup").raw(), "pending pickup");
    }

    #[test]
    fn test_status_cell_label_matches_cage_label_wording() {
        use crate::entities::{CageStatus, PartStatus, TaskStatus};
        let values = CageStatus::ALL
            .iter()
            .map(|s| s.as_str())
            .chain(PartStatus::ALL.iter().map(|s| s.as_str()))
            .chain(TaskStatus::ALL.iter().map(|s| s.as_str()));
        for value in values {
            assert_eq!(CellValue::status(value).raw(), humanize(value));
        }
    }

    #[test]
    fn test_date_and_money_cells() {
        assert_eq!(CellValue::Date(None).raw(), "TBD");
        assert_eq!(CellValue::Date(None).format_csv(), "");
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(CellValue::Date(Some(date)).raw(), "2025-06-30");
        assert_eq!(CellValue::Money(2_250_000.0).raw(), "R2,250,000");
        assert_eq!(CellValue::Money(2_250_000.0).format_csv(), "2250000.00");
    }

    #[test]
    fn test_department_cell_uses_label() {
        assert_eq!(CellValue::Department(Department::Wiring).raw(), "Electrical");
        assert_eq!(CellValue::Department(Department::Wiring).format_csv(), "wiring");
    }

    #[test]
    fn test_cell_value_md_escapes_pipes() {
        assert_eq!(CellValue::text("a|b|c").format_md(), "a\\|b\\|c");
    }

    #[test]
    fn test_render_csv() {
        let out = TableFormatter::new(COLUMNS, "project").render(&rows(), OutputFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,name,status");
        assert_eq!(lines[1], "proj-001,\"Mustang, Boss 429\",in_progress");
        assert_eq!(lines[2], "proj-006,Mach 1 | Assessment,");
    }

    #[test]
    fn test_render_md() {
        let out = TableFormatter::new(COLUMNS, "project").render(&rows(), OutputFormat::Md);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "| ID | NAME | STATUS |");
        assert_eq!(lines[1], "|---|---|---|");
        assert_eq!(lines[3], "| proj-006 | Mach 1 \\| Assessment | - |");
    }

    #[test]
    fn test_render_ids() {
        let out = TableFormatter::new(COLUMNS, "project").render(&rows(), OutputFormat::Id);
        assert_eq!(out, "proj-001\nproj-006\n");
    }

    #[test]
    fn test_render_tsv_summary() {
        let rendered = TableFormatter::new(COLUMNS, "project").render(&rows(), OutputFormat::Tsv);
        let out = console::strip_ansi_codes(&rendered);
        assert!(out.contains("proj-001"));
        assert!(out.contains("2 project(s) found."));

        let piped = TableFormatter::new(COLUMNS, "project")
            .with_config(TableConfig::for_pipe())
            .render(&rows(), OutputFormat::Tsv);
        assert!(!piped.contains("found"));
    }

    #[test]
    fn test_column_def() {
        let col = ColumnDef::new("title", "TITLE", 30);
        assert_eq!(col.key, "title");
        assert_eq!(col.header, "TITLE");
        assert_eq!(col.width, 30);
    }

    #[test]
    fn test_wrap_text_word_boundary() {
        assert_eq!(wrap_text("hello", 20), vec!["hello"]);
        assert_eq!(wrap_text("hello world", 11), vec!["hello world"]);
        assert_eq!(wrap_text("hello world foo bar", 11), vec!["hello world", "foo bar"]);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let result = wrap_text("supercalifragilisticexpialidocious", 10);
        assert_eq!(
            result,
            vec!["supercalif", "ragilistic", "expialidoc", "ious"]
        );
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("The quick brown fox jumps over the lazy dog", 15);
        assert_eq!(result, vec!["The quick brown", "fox jumps over", "the lazy dog"]);
    }

    #[test]
    fn test_table_config() {
        assert!(TableConfig::default().show_summary);
        assert_eq!(TableConfig::with_wrap(40).wrap_width, Some(40));
        assert!(!TableConfig::for_pipe().show_summary);
    }
}
