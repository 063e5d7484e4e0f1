//! User output formatters

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::users::{User, UserIdByEmail, UserStatus};

const USER_HEADERS: [&str; 5] = ["OPEN ID", "USER ID", "NAME", "EMAIL", "STATUS"];
const EMAIL_HEADERS: [&str; 3] = ["EMAIL", "USER ID", "STATUS"];

/// Single word summary of a user's account state
fn status_label(status: &UserStatus) -> &'static str {
    if status.is_resigned {
        "resigned"
    } else if status.is_frozen {
        "frozen"
    } else if status.is_exited {
        "exited"
    } else if status.is_unjoin {
        "not joined"
    } else if status.is_activated {
        "active"
    } else {
        "inactive"
    }
}

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.open_id.clone(),
        user.user_id.clone(),
        user.name.clone(),
        user.email.clone(),
        status_label(&user.status).to_string(),
    ]
}

fn email_row(entry: &UserIdByEmail) -> Vec<String> {
    let status = if entry.user_id.is_empty() {
        "not found"
    } else {
        status_label(&entry.status)
    };
    vec![entry.email.clone(), entry.user_id.clone(), status.to_string()]
}

/// Output users in the specified format
pub fn output_users(users: &[User], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = users.iter().map(user_row).collect();
    print_rows(&USER_HEADERS, &rows, users, format, no_header);
}

/// Output email to user ID lookups in the specified format
pub fn output_user_ids_by_email(entries: &[UserIdByEmail], format: OutputFormat, no_header: bool) {
    let rows: Vec<Vec<String>> = entries.iter().map(email_row).collect();
    print_rows(&EMAIL_HEADERS, &rows, entries, format, no_header);
}
