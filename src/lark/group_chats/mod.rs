//! Group chats module - create, read, update and delete group chats

mod api;
mod models;

pub use models::{GroupChat, GroupChatCreateRequest, GroupChatUpdateRequest, RestrictedModeSetting};
