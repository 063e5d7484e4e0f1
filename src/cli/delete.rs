//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a group chat
    #[command(visible_alias = "chats")]
    Chat(DeleteArgs),

    /// Delete a user group
    #[command(name = "user-group", visible_alias = "ug")]
    UserGroup(DeleteArgs),

    /// Delete a functional role
    Role(DeleteArgs),

    /// Delete a workforce type
    #[command(name = "workforce-type", visible_alias = "wt")]
    WorkforceType(DeleteArgs),

    /// Delete a department (by open department ID)
    #[command(visible_alias = "dept")]
    Department(DeleteArgs),

    /// Delete a docs folder and everything inside it
    Folder(DeleteArgs),
}

impl DeleteResource {
    pub fn args(&self) -> &DeleteArgs {
        match self {
            DeleteResource::Chat(args)
            | DeleteResource::UserGroup(args)
            | DeleteResource::Role(args)
            | DeleteResource::WorkforceType(args)
            | DeleteResource::Department(args)
            | DeleteResource::Folder(args) => args,
        }
    }

    /// Human-readable resource name for prompts and messages
    pub fn label(&self) -> &'static str {
        match self {
            DeleteResource::Chat(_) => "group chat",
            DeleteResource::UserGroup(_) => "user group",
            DeleteResource::Role(_) => "role",
            DeleteResource::WorkforceType(_) => "workforce type",
            DeleteResource::Department(_) => "department",
            DeleteResource::Folder(_) => "folder",
        }
    }
}

/// Arguments shared by every 'delete' subcommand
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// ID (or folder token) of the resource to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
