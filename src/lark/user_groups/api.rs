//! User group API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{LarkError, Result};
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{
    UserGroup, UserGroupCreateRequest, UserGroupCreated, UserGroupData, UserGroupList,
    UserGroupUpdateRequest,
};

fn group_path(group_id: &str) -> String {
    format!("{}/{}", api::USER_GROUPS, urlencoding::encode(group_id))
}

impl LarkClient {
    /// Create a user group and return its ID
    ///
    /// Refuses a group ID or a name that is already taken.
    pub async fn create_user_group(&self, request: &UserGroupCreateRequest) -> Result<String> {
        if !request.group_id.is_empty() && self.find_user_group(&request.group_id).await?.is_some()
        {
            return Err(LarkError::Validation(format!(
                "User group '{}' already exists",
                request.group_id
            )));
        }
        if self.find_user_group_by_name(&request.name).await?.is_some() {
            return Err(LarkError::Validation(format!(
                "User group name '{}' already exists",
                request.name
            )));
        }

        info!("Creating user group '{}'", request.name);
        let response: ApiResponse<UserGroupCreated> = self
            .tenant_request(HttpMethod::Post, api::USER_GROUPS, Some(request))
            .await?;
        let group_id = response.into_data().group_id;
        info!("User group created: {}", group_id);
        Ok(group_id)
    }

    /// Get a user group by ID
    pub async fn get_user_group(&self, group_id: &str) -> Result<UserGroup> {
        let path = group_path(group_id);
        debug!("Fetching user group from: {}", path);
        let response: ApiResponse<UserGroupData> =
            self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;
        Ok(response.into_data().group)
    }

    /// Get a user group, mapping API-level errors to `None`
    pub async fn find_user_group(&self, group_id: &str) -> Result<Option<UserGroup>> {
        match self.get_user_group(group_id).await {
            Ok(group) => Ok(Some(group)),
            Err(LarkError::Api { code, .. }) => {
                debug!("User group '{}' not found (code={})", group_id, code);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Rename or re-describe a user group
    pub async fn update_user_group(
        &self,
        group_id: &str,
        request: &UserGroupUpdateRequest,
    ) -> Result<()> {
        info!("Updating user group '{}'", group_id);
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Patch, &group_path(group_id), Some(request))
            .await?;
        Ok(())
    }

    pub async fn delete_user_group(&self, group_id: &str) -> Result<()> {
        info!("Deleting user group '{}'", group_id);
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Delete, &group_path(group_id), NO_BODY)
            .await?;
        Ok(())
    }

    /// List every user group of the tenant
    pub async fn list_user_groups(&self) -> Result<Vec<UserGroup>> {
        let path = format!("{}/simplelist", api::USER_GROUPS);
        let response = self
            .fetch_all_pages::<UserGroup, UserGroupList>(&path, api::DEFAULT_PAGE_SIZE)
            .await?;
        let groups = response.into_data().grouplist;
        info!("Retrieved {} user group(s)", groups.len());
        Ok(groups)
    }

    /// First user group with exactly this name
    pub async fn find_user_group_by_name(&self, name: &str) -> Result<Option<UserGroup>> {
        Ok(self
            .list_user_groups()
            .await?
            .into_iter()
            .find(|group| group.name == name))
    }
}
