//! Group chat members and administrators module

mod api;
mod commands;
mod models;

pub use commands::{run_chat_members_command, run_chat_membership_command};
pub use models::{
    AdministratorChanges, ChatMember, ChatMemberAddResult, ChatMemberList, ChatMembership,
    ChatMembershipChanges,
};
