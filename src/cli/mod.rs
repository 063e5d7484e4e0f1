//! CLI argument definitions

mod common;
mod delete;
mod get;
mod members;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults, retry};

pub use common::{IdTypeArg, MemberTypeArg, OutputFormat};
pub use delete::{DeleteArgs, DeleteResource};
pub use get::{
    ChatMemberArgs, FolderChildArgs, GetResource, RoleMemberArgs, UgMemberArgs, UserArgs,
    UserGroupArgs, WorkforceTypeArgs,
};
pub use members::{ChatMembersArgs, MembersAction, MembersTarget, RoleMembersArgs, UgMembersArgs};

/// Lark directory and collaboration management CLI
#[derive(Parser, Debug)]
#[command(name = "larkctl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    larkctl token                              Verify app credentials
    larkctl get ug                             List user groups
    larkctl get chat-members oc_123 -o json    Chat members as JSON
    larkctl members sync ug g_1 ou_1 ou_2      Make ou_1 and ou_2 the only members
    larkctl delete role r_1 -y                 Delete a role without prompting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Application ID (falls back to LARK_APP_ID, then the credentials file)
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// Application secret (falls back to LARK_APP_SECRET, then the credentials file)
    #[arg(long, global = true)]
    pub app_secret: Option<String>,

    /// Open API base URL
    #[arg(long, env = "LARK_BASE_URL", global = true, default_value = api::BASE_URL)]
    pub base_url: String,

    /// Attempts per request for transient connection failures
    #[arg(long, global = true, default_value_t = retry::BASE_RETRY_COUNT)]
    pub retry_count: u32,

    /// Base retry delay in seconds, doubled on every further attempt
    #[arg(long, global = true, default_value_t = retry::BASE_DELAY_SECS)]
    pub base_delay: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Hide table/CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify credentials by requesting fresh access tokens
    Token(TokenArgs),

    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Add, remove or sync members of chats, user groups and roles
    #[command(visible_alias = "member")]
    Members {
        #[command(subcommand)]
        action: MembersAction,
    },

    /// Delete resources
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}

/// Arguments for the 'token' command
#[derive(clap::Args, Debug)]
pub struct TokenArgs {
    /// Print the tenant access token itself
    #[arg(long, default_value_t = false)]
    pub show: bool,
}
