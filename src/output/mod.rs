//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod changes;
mod common;
mod folders;
mod members;
mod user_groups;
mod users;
mod workforce_types;

pub use changes::{output_changes, ChangeReport};
pub use common::{escape_csv, print_json, print_yaml};
pub use folders::output_folder_children;
pub use members::{output_chat_members, output_role_members, output_ug_members};
pub use user_groups::output_user_groups;
pub use users::{output_user_ids_by_email, output_users};
pub use workforce_types::output_workforce_types;
