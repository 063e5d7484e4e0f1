//! User group data models

use serde::{Deserialize, Serialize};

use crate::lark::pagination::{Page, PageData};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroupCreateRequest {
    /// Custom group ID; generated by the server when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `1` for a normal group, `2` for a dynamic one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroupUpdateRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserGroupCreated {
    #[serde(default)]
    pub group_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_user_count: i64,
    #[serde(default)]
    pub member_department_count: i64,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserGroupData {
    #[serde(default)]
    pub group: UserGroup,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct UserGroupList {
    #[serde(default)]
    pub grouplist: Vec<UserGroup>,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub has_more: bool,
}

impl PageData<UserGroup> for UserGroupList {
    fn into_page(self) -> Page<UserGroup> {
        Page {
            items: self.grouplist,
            page_token: self.page_token,
        }
    }

    fn from_items(items: Vec<UserGroup>) -> Self {
        Self {
            grouplist: items,
            page_token: String::new(),
            has_more: false,
        }
    }
}
