//! User group output formatter

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::user_groups::UserGroup;

const HEADERS: [&str; 5] = ["ID", "NAME", "USERS", "DEPARTMENTS", "DESCRIPTION"];

fn row(group: &UserGroup) -> Vec<String> {
    vec![
        group.id.clone(),
        group.name.clone(),
        group.member_user_count.to_string(),
        group.member_department_count.to_string(),
        group.description.clone(),
    ]
}

/// Output user groups in the specified format
pub fn output_user_groups(groups: &[UserGroup], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = groups.iter().map(row).collect();
    print_rows(&HEADERS, &rows, groups, format, no_header);
}
