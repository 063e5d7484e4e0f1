//! Functional role data models

use serde::{Deserialize, Serialize};

use crate::lark::pagination::{Page, PageData};

#[derive(Serialize, Debug)]
pub(crate) struct RoleRequest<'a> {
    pub role_name: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RoleCreated {
    #[serde(default)]
    pub role_id: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct RoleMembersRequest {
    pub members: Vec<String>,
}

/// Per-user outcome of a role member batch call
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMemberResult {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub reason: i64,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RoleMemberResults {
    #[serde(default)]
    pub results: Vec<RoleMemberResult>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMember {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub scope_type: String,
    #[serde(default)]
    pub department_ids: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct RoleMemberList {
    #[serde(default)]
    pub members: Vec<RoleMember>,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub has_more: bool,
}

impl PageData<RoleMember> for RoleMemberList {
    fn into_page(self) -> Page<RoleMember> {
        Page {
            items: self.members,
            page_token: self.page_token,
        }
    }

    fn from_items(items: Vec<RoleMember>) -> Self {
        Self {
            members: items,
            page_token: String::new(),
            has_more: false,
        }
    }
}
