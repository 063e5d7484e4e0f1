//! User group member data models

use serde::{Deserialize, Serialize};

use crate::lark::pagination::{Page, PageData};

/// Kind of entity a user group member is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserGroupMemberType {
    #[default]
    User,
    Department,
}

impl UserGroupMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserGroupMemberType::User => "user",
            UserGroupMemberType::Department => "department",
        }
    }
}

impl std::fmt::Display for UserGroupMemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroupMember {
    #[serde(default)]
    pub member_id: String,
    #[serde(default)]
    pub member_type: String,
    #[serde(default)]
    pub member_id_type: String,
}

impl UserGroupMember {
    /// User member addressed by open ID
    pub fn user(open_id: &str) -> Self {
        Self {
            member_id: open_id.to_string(),
            member_type: UserGroupMemberType::User.as_str().to_string(),
            member_id_type: "open_id".to_string(),
        }
    }
}

/// Body of the batch add/remove calls
#[derive(Serialize, Debug)]
pub(crate) struct UserGroupMemberBatch {
    pub members: Vec<UserGroupMember>,
}

/// Per-member outcome reported by batch add
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroupMemberResult {
    #[serde(default)]
    pub member_id: String,
    #[serde(default)]
    pub code: i64,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserGroupMemberAddData {
    #[serde(default)]
    pub results: Vec<UserGroupMemberResult>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserGroupMemberList {
    #[serde(default)]
    pub memberlist: Vec<UserGroupMember>,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub has_more: bool,
}

impl PageData<UserGroupMember> for UserGroupMemberList {
    fn into_page(self) -> Page<UserGroupMember> {
        Page {
            items: self.memberlist,
            page_token: self.page_token,
        }
    }

    fn from_items(items: Vec<UserGroupMember>) -> Self {
        Self {
            memberlist: items,
            page_token: String::new(),
            has_more: false,
        }
    }
}
