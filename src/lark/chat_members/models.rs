//! Chat member data models

use serde::{Deserialize, Serialize};

use crate::lark::batch::MemberDiff;
use crate::lark::pagination::{Page, PageData};

/// Member entry returned by the member list endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMember {
    #[serde(default)]
    pub member_id: String,
    #[serde(default)]
    pub member_id_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tenant_key: String,
}

/// `data` payload of the member list endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ChatMemberList {
    #[serde(default)]
    pub items: Vec<ChatMember>,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub member_total: i64,
}

impl PageData<ChatMember> for ChatMemberList {
    fn into_page(self) -> Page<ChatMember> {
        Page {
            items: self.items,
            page_token: self.page_token,
        }
    }

    fn from_items(items: Vec<ChatMember>) -> Self {
        Self {
            member_total: items.len() as i64,
            items,
            page_token: String::new(),
            has_more: false,
        }
    }
}

/// Body of the add/remove member calls
#[derive(Serialize, Debug)]
pub(crate) struct ChatMemberRequest {
    pub id_list: Vec<String>,
}

/// IDs the add member call reported back, merged across chunks
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMemberAddResult {
    #[serde(default)]
    pub invalid_id_list: Vec<String>,
    #[serde(default)]
    pub not_existed_id_list: Vec<String>,
    #[serde(default)]
    pub pending_approval_id_list: Vec<String>,
}

impl ChatMemberAddResult {
    pub(crate) fn merge(&mut self, other: ChatMemberAddResult) {
        self.invalid_id_list.extend(other.invalid_id_list);
        self.not_existed_id_list.extend(other.not_existed_id_list);
        self.pending_approval_id_list
            .extend(other.pending_approval_id_list);
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ChatMemberRemoveResult {
    #[serde(default)]
    pub invalid_id_list: Vec<String>,
}

/// Body of the add/delete manager calls
#[derive(Serialize, Debug)]
pub(crate) struct AdministratorRequest {
    pub manager_ids: Vec<String>,
}

/// Managers the chat has after an add/delete manager call
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AdministratorChanges {
    #[serde(default)]
    pub chat_managers: Vec<String>,
    #[serde(default)]
    pub chat_bot_managers: Vec<String>,
}

impl AdministratorChanges {
    pub(crate) fn merge(&mut self, other: AdministratorChanges) {
        self.chat_managers.extend(other.chat_managers);
        self.chat_bot_managers.extend(other.chat_bot_managers);
    }
}

/// Members and administrators of a chat
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMembership {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub administrators: Vec<String>,
}

/// What a membership sync changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMembershipChanges {
    pub members: MemberDiff,
    pub administrators: MemberDiff,
}
