//! Group chat API operations

use log::{debug, info};

use crate::config::api;
use crate::error::Result;
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;
use crate::lark::validation::validate_group_chat_name;

use super::models::{GroupChat, GroupChatCreateRequest, GroupChatUpdateRequest};

impl LarkClient {
    /// Create a group chat; the calling app's bot is always added
    pub async fn create_group_chat(&self, request: &GroupChatCreateRequest) -> Result<GroupChat> {
        validate_group_chat_name(&request.chat_type, &request.name)?;

        let mut request = request.clone();
        if !request.bot_id_list.iter().any(|id| id == self.app_id()) {
            request.bot_id_list.push(self.app_id().to_string());
        }

        info!("Creating group chat '{}'", request.name);
        let response: ApiResponse<GroupChat> = self
            .tenant_request(HttpMethod::Post, api::GROUP_CHATS, Some(&request))
            .await?;
        let chat = response.into_data();
        info!("Group chat created: {}", chat.chat_id);
        Ok(chat)
    }

    /// Get a group chat by chat ID
    pub async fn get_group_chat(&self, chat_id: &str) -> Result<GroupChat> {
        let path = format!("{}/{}", api::GROUP_CHATS, urlencoding::encode(chat_id));
        debug!("Fetching group chat from: {}", path);
        let response: ApiResponse<GroupChat> =
            self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;

        let mut chat = response.into_data();
        chat.chat_id = chat_id.to_string();
        Ok(chat)
    }

    /// Update a group chat's settings
    pub async fn update_group_chat(
        &self,
        chat_id: &str,
        request: &GroupChatUpdateRequest,
    ) -> Result<()> {
        if !request.name.is_empty() {
            validate_group_chat_name(&request.chat_type, &request.name)?;
        }

        info!("Updating group chat '{}'", chat_id);
        let path = format!("{}/{}", api::GROUP_CHATS, urlencoding::encode(chat_id));
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Put, &path, Some(request))
            .await?;
        Ok(())
    }

    /// Disband a group chat
    pub async fn delete_group_chat(&self, chat_id: &str) -> Result<()> {
        info!("Deleting group chat '{}'", chat_id);
        let path = format!("{}/{}", api::GROUP_CHATS, urlencoding::encode(chat_id));
        let _: ApiResponse<serde_json::Value> =
            self.tenant_request(HttpMethod::Delete, &path, NO_BODY).await?;
        Ok(())
    }
}
