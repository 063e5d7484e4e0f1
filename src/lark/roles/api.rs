//! Functional role API operations

use log::{debug, info};

use crate::config::{api, batch};
use crate::error::{LarkError, Result};
use crate::lark::batch::{BatchRunner, MemberDiff};
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;

use super::models::{
    RoleCreated, RoleMember, RoleMemberList, RoleMemberResult, RoleMemberResults, RoleRequest,
    RoleMembersRequest,
};

/// Result reasons that count as success when adding (added, already a member)
const ADD_ACCEPTED_REASONS: &[i64] = &[1, 4];

/// Result reasons that count as success when removing (removed, not a member)
const REMOVE_ACCEPTED_REASONS: &[i64] = &[1, 5];

fn role_path(role_id: &str) -> String {
    format!("{}/{}", api::ROLES, urlencoding::encode(role_id))
}

/// Fail on the first result whose reason is not accepted
fn check_results(
    results: &[RoleMemberResult],
    accepted: &[i64],
    action: &str,
    role_id: &str,
) -> Result<()> {
    match results.iter().find(|r| !accepted.contains(&r.reason)) {
        Some(rejected) => Err(LarkError::Validation(format!(
            "Failed to {} member {} for role {}: {}",
            action, rejected.user_id, role_id, rejected.reason
        ))),
        None => Ok(()),
    }
}

impl LarkClient {
    /// Create a functional role and return its ID
    pub async fn create_role(&self, role_name: &str) -> Result<String> {
        info!("Creating role '{}'", role_name);
        let response: ApiResponse<RoleCreated> = self
            .tenant_request(HttpMethod::Post, api::ROLES, Some(&RoleRequest { role_name }))
            .await?;
        Ok(response.into_data().role_id)
    }

    pub async fn update_role(&self, role_id: &str, role_name: &str) -> Result<()> {
        info!("Renaming role '{}' to '{}'", role_id, role_name);
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(
                HttpMethod::Put,
                &role_path(role_id),
                Some(&RoleRequest { role_name }),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_role(&self, role_id: &str) -> Result<()> {
        info!("Deleting role '{}'", role_id);
        let _: ApiResponse<serde_json::Value> = self
            .tenant_request(HttpMethod::Delete, &role_path(role_id), NO_BODY)
            .await?;
        Ok(())
    }

    /// Add users (by open ID) to a role
    ///
    /// A user who is already a member counts as added.
    pub async fn add_role_members(
        &self,
        role_id: &str,
        open_ids: &[String],
    ) -> Result<Vec<RoleMemberResult>> {
        self.role_member_call(
            &mut BatchRunner::new(),
            role_id,
            open_ids,
            RoleMemberAction::Add,
        )
        .await
    }

    /// Remove users (by open ID) from a role
    ///
    /// A user who is not a member counts as removed.
    pub async fn remove_role_members(
        &self,
        role_id: &str,
        open_ids: &[String],
    ) -> Result<Vec<RoleMemberResult>> {
        self.role_member_call(
            &mut BatchRunner::new(),
            role_id,
            open_ids,
            RoleMemberAction::Remove,
        )
        .await
    }

    async fn role_member_call(
        &self,
        runner: &mut BatchRunner,
        role_id: &str,
        open_ids: &[String],
        action: RoleMemberAction,
    ) -> Result<Vec<RoleMemberResult>> {
        let (method, suffix, accepted, verb) = match action {
            RoleMemberAction::Add => (
                HttpMethod::Post,
                "batch_create",
                ADD_ACCEPTED_REASONS,
                "add",
            ),
            RoleMemberAction::Remove => (
                HttpMethod::Patch,
                "batch_delete",
                REMOVE_ACCEPTED_REASONS,
                "remove",
            ),
        };
        info!("Role '{}': {} {} member(s)", role_id, verb, open_ids.len());

        let path = format!(
            "{}/members/{}?user_id_type=open_id",
            role_path(role_id),
            suffix
        );
        // One run per chunk so a rejected result still leaves the accepted
        // IDs of that chunk in the applied list
        let mut applied_results = Vec::new();
        for chunk in open_ids.chunks(batch::PERSON_CHUNK_SIZE) {
            let results: Vec<RoleMemberResult> = runner
                .run(chunk, chunk.len(), |members| {
                    let path = path.as_str();
                    async move {
                        let response: ApiResponse<RoleMemberResults> = self
                            .tenant_request(method, path, Some(&RoleMembersRequest { members }))
                            .await?;
                        Ok(response.into_data().results)
                    }
                })
                .await?
                .into_iter()
                .flatten()
                .collect();

            if let Err(e) = check_results(&results, accepted, verb, role_id) {
                let rejected: Vec<String> = results
                    .iter()
                    .filter(|r| !accepted.contains(&r.reason))
                    .map(|r| r.user_id.clone())
                    .collect();
                runner.retract(&rejected);
                return Err(runner.abort(e));
            }
            applied_results.extend(results);
        }

        Ok(applied_results)
    }

    /// List every member of a role
    pub async fn list_role_members(&self, role_id: &str) -> Result<Vec<RoleMember>> {
        let path = format!("{}/members?user_id_type=open_id", role_path(role_id));
        debug!("Listing members of role '{}'", role_id);
        let response = self
            .fetch_all_pages::<RoleMember, RoleMemberList>(&path, api::DEFAULT_PAGE_SIZE)
            .await?;
        Ok(response.into_data().members)
    }

    /// Make the members of a role exactly `desired`; adds run first
    pub async fn sync_role_members(&self, role_id: &str, desired: &[String]) -> Result<MemberDiff> {
        let current: Vec<String> = self
            .list_role_members(role_id)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        let diff = MemberDiff::between(&current, desired);
        let mut runner = BatchRunner::new();
        self.role_member_call(&mut runner, role_id, &diff.added, RoleMemberAction::Add)
            .await?;
        self.role_member_call(&mut runner, role_id, &diff.removed, RoleMemberAction::Remove)
            .await?;
        Ok(diff)
    }
}

#[derive(Debug, Clone, Copy)]
enum RoleMemberAction {
    Add,
    Remove,
}
