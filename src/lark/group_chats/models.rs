//! Group chat data models

use serde::{Deserialize, Serialize};

use crate::lark::models::I18nName;

/// Restricted mode (screenshot/download/message) settings
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedModeSetting {
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub screenshot_has_permission_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub download_has_permission_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message_has_permission_setting: String,
}

/// Body of the create group chat call
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GroupChatCreateRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub i18n_names: I18nName,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_id_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bot_id_list: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_message_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chat_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chat_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub join_message_visibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub leave_message_visibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub membership_approval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_mode_setting: Option<RestrictedModeSetting>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub urgent_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub video_conference_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub edit_permission: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hide_member_count_setting: String,
}

/// Body of the update group chat call; empty fields are left unchanged
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GroupChatUpdateRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "I18nName::is_empty")]
    pub i18n_names: I18nName,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub add_member_permission: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub share_card_permission: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub at_all_permission: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub edit_permission: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub join_message_visibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub leave_message_visibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub membership_approval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_mode_setting: Option<RestrictedModeSetting>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chat_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_message_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub urgent_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub video_conference_setting: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hide_member_count_setting: String,
}

/// Group chat as returned by create and get
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GroupChat {
    /// Only present in the create response; filled in by the client on get
    #[serde(default)]
    pub chat_id: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub i18n_names: I18nName,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner_id_type: String,
    #[serde(default)]
    pub add_member_permission: String,
    #[serde(default)]
    pub share_card_permission: String,
    #[serde(default)]
    pub at_all_permission: String,
    #[serde(default)]
    pub edit_permission: String,
    #[serde(default)]
    pub user_manager_id_list: Vec<String>,
    #[serde(default)]
    pub bot_manager_id_list: Vec<String>,
    #[serde(default)]
    pub group_message_type: String,
    #[serde(default)]
    pub chat_mode: String,
    #[serde(default)]
    pub chat_type: String,
    #[serde(default)]
    pub chat_tag: String,
    #[serde(default)]
    pub join_message_visibility: String,
    #[serde(default)]
    pub leave_message_visibility: String,
    #[serde(default)]
    pub membership_approval: String,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub tenant_key: String,
    #[serde(default)]
    pub user_count: String,
    #[serde(default)]
    pub bot_count: String,
    #[serde(default)]
    pub restricted_mode_setting: RestrictedModeSetting,
    #[serde(default)]
    pub urgent_setting: String,
    #[serde(default)]
    pub video_conference_setting: String,
    #[serde(default)]
    pub hide_member_count_setting: String,
    #[serde(default)]
    pub chat_status: String,
}

impl GroupChat {
    /// Administrators of the chat, persons first then bots
    pub fn administrators(&self) -> Vec<String> {
        self.user_manager_id_list
            .iter()
            .chain(self.bot_manager_id_list.iter())
            .cloned()
            .collect()
    }
}
