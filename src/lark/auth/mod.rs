//! Access token bootstrap

mod api;
mod commands;
mod models;

pub use commands::run_token_command;
pub use models::{AccessTokenRequest, AccessTokenResponse};
