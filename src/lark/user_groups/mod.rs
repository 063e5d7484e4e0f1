//! User groups module

mod api;
mod commands;
mod models;

pub use commands::run_user_groups_command;
pub use models::{UserGroup, UserGroupCreateRequest, UserGroupUpdateRequest};
