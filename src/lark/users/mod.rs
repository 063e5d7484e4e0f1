//! Users module - batch lookups by ID and by email

mod api;
mod commands;
mod models;

pub use commands::run_users_command;
pub use models::{User, UserIdByEmail, UserStatus};
