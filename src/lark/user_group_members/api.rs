//! User group member API operations

use log::{info, warn};

use crate::config::{api, batch};
use crate::error::Result;
use crate::lark::batch::{BatchRunner, MemberDiff};
use crate::lark::client::LarkClient;
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{
    UserGroupMember, UserGroupMemberAddData, UserGroupMemberBatch, UserGroupMemberList,
    UserGroupMemberResult, UserGroupMemberType,
};

fn member_path(group_id: &str, suffix: &str) -> String {
    format!(
        "{}/{}/member/{}",
        api::USER_GROUPS,
        urlencoding::encode(group_id),
        suffix
    )
}

impl LarkClient {
    /// Add users (by open ID) to a user group, 100 per request
    pub async fn add_user_group_members(
        &self,
        group_id: &str,
        open_ids: &[String],
    ) -> Result<Vec<UserGroupMemberResult>> {
        self.add_user_group_members_with(&mut BatchRunner::new(), group_id, open_ids)
            .await
    }

    async fn add_user_group_members_with(
        &self,
        runner: &mut BatchRunner,
        group_id: &str,
        open_ids: &[String],
    ) -> Result<Vec<UserGroupMemberResult>> {
        info!(
            "Adding {} member(s) to user group '{}'",
            open_ids.len(),
            group_id
        );
        let path = member_path(group_id, "batch_add");
        let chunks = runner
            .run(open_ids, batch::USER_GROUP_MEMBER_CHUNK_SIZE, |chunk| {
                let body = member_batch(&chunk);
                let path = path.as_str();
                async move {
                    let response: ApiResponse<UserGroupMemberAddData> = self
                        .tenant_request(HttpMethod::Post, path, Some(&body))
                        .await?;
                    Ok(response.into_data().results)
                }
            })
            .await?;

        let results: Vec<UserGroupMemberResult> = chunks.into_iter().flatten().collect();
        for failed in results.iter().filter(|r| r.code != 0) {
            warn!(
                "User group '{}' rejected member '{}' (code={})",
                group_id, failed.member_id, failed.code
            );
        }
        Ok(results)
    }

    /// Remove users (by open ID) from a user group, 100 per request
    pub async fn remove_user_group_members(&self, group_id: &str, open_ids: &[String]) -> Result<()> {
        self.remove_user_group_members_with(&mut BatchRunner::new(), group_id, open_ids)
            .await
    }

    async fn remove_user_group_members_with(
        &self,
        runner: &mut BatchRunner,
        group_id: &str,
        open_ids: &[String],
    ) -> Result<()> {
        info!(
            "Removing {} member(s) from user group '{}'",
            open_ids.len(),
            group_id
        );
        let path = member_path(group_id, "batch_remove");
        runner
            .run(open_ids, batch::USER_GROUP_MEMBER_CHUNK_SIZE, |chunk| {
                let body = member_batch(&chunk);
                let path = path.as_str();
                async move {
                    let _: ApiResponse<serde_json::Value> = self
                        .tenant_request(HttpMethod::Post, path, Some(&body))
                        .await?;
                    Ok(())
                }
            })
            .await?;
        Ok(())
    }

    /// List members of one type
    pub async fn list_user_group_members(
        &self,
        group_id: &str,
        member_type: UserGroupMemberType,
    ) -> Result<Vec<UserGroupMember>> {
        let path = format!(
            "{}?member_type={}",
            member_path(group_id, "simplelist"),
            member_type
        );
        let response = self
            .fetch_all_pages::<UserGroupMember, UserGroupMemberList>(
                &path,
                api::DEFAULT_PAGE_SIZE,
            )
            .await?;
        Ok(response.into_data().memberlist)
    }

    /// Make the user members of a group exactly `desired`
    ///
    /// Adds run before removals; a failing chunk aborts with
    /// [`crate::error::LarkError::PartialBatch`].
    pub async fn sync_user_group_members(
        &self,
        group_id: &str,
        desired: &[String],
    ) -> Result<MemberDiff> {
        let current: Vec<String> = self
            .list_user_group_members(group_id, UserGroupMemberType::User)
            .await?
            .into_iter()
            .map(|m| m.member_id)
            .collect();

        let diff = MemberDiff::between(&current, desired);
        if diff.is_empty() {
            info!("User group '{}' already up to date", group_id);
            return Ok(diff);
        }

        let mut runner = BatchRunner::new();
        self.add_user_group_members_with(&mut runner, group_id, &diff.added)
            .await?;
        self.remove_user_group_members_with(&mut runner, group_id, &diff.removed)
            .await?;
        Ok(diff)
    }
}

fn member_batch(open_ids: &[String]) -> UserGroupMemberBatch {
    UserGroupMemberBatch {
        members: open_ids.iter().map(|id| UserGroupMember::user(id)).collect(),
    }
}
