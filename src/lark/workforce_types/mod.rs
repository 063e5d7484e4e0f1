//! Workforce types (employee type enums) module

mod api;
mod commands;
mod models;

pub use commands::run_workforce_types_command;
pub use models::{I18nContent, WorkforceType, WorkforceTypeRequest};
