//! Functional roles module

mod api;
mod commands;
mod models;

pub use commands::{run_role_members_command, run_role_membership_command};
pub use models::{RoleMember, RoleMemberResult};
