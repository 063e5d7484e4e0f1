//! User group members module

mod api;
mod commands;
mod models;

pub use commands::{run_ug_members_command, run_ug_membership_command};
pub use models::{UserGroupMember, UserGroupMemberResult, UserGroupMemberType};
