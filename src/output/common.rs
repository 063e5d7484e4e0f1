//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Borderless table with uppercase headers
pub(super) fn render_table(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(headers.to_vec());
    }
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

/// CSV document, one line per row
pub(super) fn render_csv(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        lines.push(headers.join(","));
    }
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| escape_csv(cell)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize JSON output: {}", e),
    }
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Failed to serialize YAML output: {}", e),
    }
}

/// Print rows in the requested format; JSON/YAML use `structured` instead
pub(super) fn print_rows<T: Serialize + ?Sized>(
    headers: &[&str],
    rows: &[Vec<String>],
    structured: &T,
    format: OutputFormat,
    no_header: bool,
) {
    match format {
        OutputFormat::Table => println!("{}", render_table(headers, rows, no_header)),
        OutputFormat::Csv => println!("{}", render_csv(headers, rows, no_header)),
        OutputFormat::Json => print_json(structured),
        OutputFormat::Yaml => print_yaml(structured),
    }
}
