//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::{IdTypeArg, MemberTypeArg, OutputFormat};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get user groups
    #[command(
        name = "user-groups",
        visible_alias = "ug",
        visible_alias = "ugs",
        visible_alias = "user-group"
    )]
    UserGroups(UserGroupArgs),

    /// Get members of a group chat
    #[command(name = "chat-members", visible_alias = "chat-member")]
    ChatMembers(ChatMemberArgs),

    /// Get members of a user group
    #[command(name = "ug-members", visible_alias = "ug-member")]
    UgMembers(UgMemberArgs),

    /// Get members of a functional role
    #[command(name = "role-members", visible_alias = "role-member")]
    RoleMembers(RoleMemberArgs),

    /// Get workforce types (employee type enums)
    #[command(
        name = "workforce-types",
        visible_alias = "wt",
        visible_alias = "workforce-type"
    )]
    WorkforceTypes(WorkforceTypeArgs),

    /// Get files and folders inside a docs folder
    #[command(name = "folder-children", visible_alias = "folder")]
    FolderChildren(FolderChildArgs),

    /// Get users by ID or email
    #[command(name = "users", visible_alias = "user")]
    Users(UserArgs),
}

/// Arguments for 'get user-groups' subcommand
#[derive(Parser, Debug)]
pub struct UserGroupArgs {
    /// User group ID to show (lists all groups when omitted)
    pub id: Option<String>,

    /// Filter groups by name (substring match, case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get chat-members' subcommand
#[derive(Parser, Debug)]
pub struct ChatMemberArgs {
    /// Group chat ID (oc_xxx)
    pub chat_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get ug-members' subcommand
#[derive(Parser, Debug)]
pub struct UgMemberArgs {
    /// User group ID
    pub group_id: String,

    /// Kind of members to list
    #[arg(short = 't', long, value_enum, default_value_t = MemberTypeArg::User)]
    pub member_type: MemberTypeArg,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get role-members' subcommand
#[derive(Parser, Debug)]
pub struct RoleMemberArgs {
    /// Functional role ID
    pub role_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get workforce-types' subcommand
#[derive(Parser, Debug)]
pub struct WorkforceTypeArgs {
    /// Enum ID to show (lists all types when omitted)
    pub enum_id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get folder-children' subcommand
#[derive(Parser, Debug)]
pub struct FolderChildArgs {
    /// Folder token (the root folder when omitted)
    pub folder_token: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get users' subcommand
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User IDs, or email addresses with --email (comma-separated or repeated)
    #[arg(required = true, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Kind of IDs given
    #[arg(short = 't', long, value_enum, default_value_t = IdTypeArg::OpenId)]
    pub id_type: IdTypeArg,

    /// Treat the arguments as email addresses
    #[arg(short, long, default_value_t = false, conflicts_with = "id_type")]
    pub email: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
