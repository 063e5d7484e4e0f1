//! Members command definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// What to do with the given member IDs
#[derive(Subcommand, Debug)]
pub enum MembersAction {
    /// Make the given IDs the complete member list
    Sync {
        #[command(subcommand)]
        target: MembersTarget,
    },

    /// Add the given IDs
    Add {
        #[command(subcommand)]
        target: MembersTarget,
    },

    /// Remove the given IDs
    #[command(visible_alias = "rm")]
    Remove {
        #[command(subcommand)]
        target: MembersTarget,
    },
}

impl MembersAction {
    pub fn target(&self) -> &MembersTarget {
        match self {
            MembersAction::Sync { target }
            | MembersAction::Add { target }
            | MembersAction::Remove { target } => target,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            MembersAction::Sync { .. } => "sync",
            MembersAction::Add { .. } => "add",
            MembersAction::Remove { .. } => "remove",
        }
    }
}

/// Membership owner
#[derive(Subcommand, Debug)]
pub enum MembersTarget {
    /// Group chat members and administrators
    Chat(ChatMembersArgs),

    /// User group members
    #[command(visible_alias = "user-group")]
    Ug(UgMembersArgs),

    /// Functional role members
    Role(RoleMembersArgs),
}

/// Arguments for chat membership changes
#[derive(Parser, Debug)]
pub struct ChatMembersArgs {
    /// Group chat ID (oc_xxx)
    pub chat_id: String,

    /// Member IDs: user open IDs (ou_) or bot app IDs (cli_)
    #[arg(value_delimiter = ',')]
    pub members: Vec<String>,

    /// Administrator IDs (for sync they must also be listed as members)
    #[arg(short, long = "admin", value_delimiter = ',')]
    pub admins: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for user group membership changes
#[derive(Parser, Debug)]
pub struct UgMembersArgs {
    /// User group ID
    pub group_id: String,

    /// User open IDs (ou_xxx)
    #[arg(value_delimiter = ',')]
    pub members: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for role membership changes
#[derive(Parser, Debug)]
pub struct RoleMembersArgs {
    /// Functional role ID
    pub role_id: String,

    /// User open IDs (ou_xxx)
    #[arg(value_delimiter = ',')]
    pub members: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
