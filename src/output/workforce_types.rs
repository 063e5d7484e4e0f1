//! Workforce type output formatter

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::workforce_types::WorkforceType;

const HEADERS: [&str; 5] = ["ENUM ID", "VALUE", "CONTENT", "TYPE", "STATUS"];

fn type_label(enum_type: i32) -> &'static str {
    match enum_type {
        1 => "built-in",
        2 => "custom",
        _ => "unknown",
    }
}

fn status_label(enum_status: i32) -> &'static str {
    match enum_status {
        1 => "active",
        2 => "inactive",
        _ => "unknown",
    }
}

fn row(workforce_type: &WorkforceType) -> Vec<String> {
    vec![
        workforce_type.enum_id.clone(),
        workforce_type.enum_value.clone(),
        workforce_type.content.clone(),
        type_label(workforce_type.enum_type).to_string(),
        status_label(workforce_type.enum_status).to_string(),
    ]
}

/// Output workforce types in the specified format
pub fn output_workforce_types(types: &[WorkforceType], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = types.iter().map(row).collect();
    print_rows(&HEADERS, &rows, types, format, no_header);
}
