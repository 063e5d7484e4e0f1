//! Chat member API operations
//!
//! Every write call splits its IDs into bots and persons first: bots go out
//! in chunks of 5 with `member_id_type=app_id`, persons in chunks of 50.

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{api, batch};
use crate::error::{LarkError, Result};
use crate::lark::batch::{split_bots_and_persons, with_app_id_type, BatchRunner, MemberDiff, MemberKind};
use crate::lark::client::LarkClient;
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;
use crate::lark::validation::validate_subset;

use super::models::{
    AdministratorChanges, AdministratorRequest, ChatMember, ChatMemberAddResult, ChatMemberList,
    ChatMemberRemoveResult, ChatMemberRequest, ChatMembership, ChatMembershipChanges,
};

fn chat_path(chat_id: &str, suffix: &str) -> String {
    format!(
        "{}/{}/{}",
        api::GROUP_CHATS,
        urlencoding::encode(chat_id),
        suffix
    )
}

impl LarkClient {
    /// Send bot chunks then person chunks through `runner`
    async fn send_member_chunks<B, R>(
        &self,
        runner: &mut BatchRunner,
        method: HttpMethod,
        path: &str,
        ids: &[String],
        body_for: impl Fn(Vec<String>) -> B,
    ) -> Result<Vec<R>>
    where
        B: Serialize,
        R: DeserializeOwned + Default,
    {
        let (bots, persons) = split_bots_and_persons(ids)?;
        debug!(
            "{} {}: {} bot(s), {} person(s)",
            method,
            path,
            bots.len(),
            persons.len()
        );

        let bot_path = with_app_id_type(path);
        let mut results = runner
            .run(&bots, MemberKind::Bot.chunk_size(), |chunk| {
                let body = body_for(chunk);
                let path = bot_path.as_str();
                async move {
                    let response: ApiResponse<R> =
                        self.tenant_request(method, path, Some(&body)).await?;
                    Ok(response.into_data())
                }
            })
            .await?;

        let person_results = runner
            .run(&persons, MemberKind::Person.chunk_size(), |chunk| {
                let body = body_for(chunk);
                async move {
                    let response: ApiResponse<R> =
                        self.tenant_request(method, path, Some(&body)).await?;
                    Ok(response.into_data())
                }
            })
            .await?;
        results.extend(person_results);

        Ok(results)
    }

    /// List every member of a group chat
    pub async fn list_group_chat_members(&self, chat_id: &str) -> Result<Vec<ChatMember>> {
        let response = self
            .fetch_all_pages::<ChatMember, ChatMemberList>(
                &chat_path(chat_id, "members"),
                api::DEFAULT_PAGE_SIZE,
            )
            .await?;
        let list = response.into_data();
        info!("Retrieved {} member(s) of chat '{}'", list.member_total, chat_id);
        Ok(list.items)
    }

    /// Current members and administrators of a group chat
    pub async fn group_chat_membership(&self, chat_id: &str) -> Result<ChatMembership> {
        let members = self.list_group_chat_members(chat_id).await?;
        let chat = self.get_group_chat(chat_id).await?;
        Ok(ChatMembership {
            members: members.into_iter().map(|m| m.member_id).collect(),
            administrators: chat.administrators(),
        })
    }

    /// Add members to a group chat
    ///
    /// The whole chunk fails if any ID in it cannot be added.
    pub async fn add_group_chat_members(
        &self,
        chat_id: &str,
        ids: &[String],
    ) -> Result<ChatMemberAddResult> {
        self.add_group_chat_members_with(&mut BatchRunner::new(), chat_id, ids)
            .await
    }

    async fn add_group_chat_members_with(
        &self,
        runner: &mut BatchRunner,
        chat_id: &str,
        ids: &[String],
    ) -> Result<ChatMemberAddResult> {
        info!("Adding {} member(s) to chat '{}'", ids.len(), chat_id);
        let path = format!("{}?succeed_type=2", chat_path(chat_id, "members"));
        let results: Vec<ChatMemberAddResult> = self
            .send_member_chunks(runner, HttpMethod::Post, &path, ids, |id_list| {
                ChatMemberRequest { id_list }
            })
            .await?;

        let mut total = ChatMemberAddResult::default();
        for result in results {
            total.merge(result);
        }
        Ok(total)
    }

    /// Remove members from a group chat
    ///
    /// Fails when the API reports any of the IDs as invalid.
    pub async fn delete_group_chat_members(&self, chat_id: &str, ids: &[String]) -> Result<()> {
        self.delete_group_chat_members_with(&mut BatchRunner::new(), chat_id, ids)
            .await
    }

    async fn delete_group_chat_members_with(
        &self,
        runner: &mut BatchRunner,
        chat_id: &str,
        ids: &[String],
    ) -> Result<()> {
        info!("Removing {} member(s) from chat '{}'", ids.len(), chat_id);
        let results: Vec<ChatMemberRemoveResult> = self
            .send_member_chunks(
                runner,
                HttpMethod::Delete,
                &chat_path(chat_id, "members"),
                ids,
                |id_list| ChatMemberRequest { id_list },
            )
            .await?;

        let invalid: Vec<String> = results
            .into_iter()
            .flat_map(|r| r.invalid_id_list)
            .collect();
        if !invalid.is_empty() {
            runner.retract(&invalid);
            return Err(LarkError::Validation(format!(
                "invalid ID list, {}",
                invalid.join(", ")
            )));
        }
        Ok(())
    }

    /// Grant administrator rights; at most 10 per common group chat
    pub async fn add_group_chat_administrators(
        &self,
        chat_id: &str,
        ids: &[String],
    ) -> Result<AdministratorChanges> {
        self.add_group_chat_administrators_with(&mut BatchRunner::new(), chat_id, ids)
            .await
    }

    async fn add_group_chat_administrators_with(
        &self,
        runner: &mut BatchRunner,
        chat_id: &str,
        ids: &[String],
    ) -> Result<AdministratorChanges> {
        if ids.len() > batch::MAX_ADMINISTRATORS {
            return Err(LarkError::Validation(format!(
                "invalid administrator count, max {} administrators for common group",
                batch::MAX_ADMINISTRATORS
            )));
        }

        info!("Adding {} administrator(s) to chat '{}'", ids.len(), chat_id);
        self.manager_call(runner, chat_id, "managers/add_managers", ids)
            .await
    }

    /// Revoke administrator rights
    pub async fn delete_group_chat_administrators(
        &self,
        chat_id: &str,
        ids: &[String],
    ) -> Result<AdministratorChanges> {
        info!(
            "Removing {} administrator(s) from chat '{}'",
            ids.len(),
            chat_id
        );
        self.manager_call(&mut BatchRunner::new(), chat_id, "managers/delete_managers", ids)
            .await
    }

    async fn manager_call(
        &self,
        runner: &mut BatchRunner,
        chat_id: &str,
        suffix: &str,
        ids: &[String],
    ) -> Result<AdministratorChanges> {
        let results: Vec<AdministratorChanges> = self
            .send_member_chunks(
                runner,
                HttpMethod::Post,
                &chat_path(chat_id, suffix),
                ids,
                |manager_ids| AdministratorRequest { manager_ids },
            )
            .await?;

        let mut total = AdministratorChanges::default();
        for result in results {
            total.merge(result);
        }
        Ok(total)
    }

    /// Move a chat from `current` to `desired` membership
    ///
    /// Runs add members, add administrators, remove administrators, remove
    /// members, in that order, and stops at the first failing chunk. The
    /// resulting [`LarkError::PartialBatch`] lists every ID applied before
    /// the failure, across all four steps.
    pub async fn sync_group_chat_members(
        &self,
        chat_id: &str,
        current: &ChatMembership,
        desired: &ChatMembership,
    ) -> Result<ChatMembershipChanges> {
        validate_subset(
            &desired.administrators,
            &desired.members,
            "administrators",
            "members",
        )?;

        let changes = ChatMembershipChanges {
            members: MemberDiff::between(&current.members, &desired.members),
            administrators: MemberDiff::between(&current.administrators, &desired.administrators),
        };
        info!(
            "Syncing chat '{}': +{}/-{} member(s), +{}/-{} administrator(s)",
            chat_id,
            changes.members.added.len(),
            changes.members.removed.len(),
            changes.administrators.added.len(),
            changes.administrators.removed.len()
        );

        let mut runner = BatchRunner::new();
        if !changes.members.added.is_empty() {
            let step = self
                .add_group_chat_members_with(&mut runner, chat_id, &changes.members.added)
                .await;
            step.map_err(|e| runner.abort(e))?;
        }
        if !changes.administrators.added.is_empty() {
            let step = self
                .add_group_chat_administrators_with(
                    &mut runner,
                    chat_id,
                    &changes.administrators.added,
                )
                .await;
            step.map_err(|e| runner.abort(e))?;
        }
        if !changes.administrators.removed.is_empty() {
            let step = self
                .manager_call(
                    &mut runner,
                    chat_id,
                    "managers/delete_managers",
                    &changes.administrators.removed,
                )
                .await;
            step.map_err(|e| runner.abort(e))?;
        }
        if !changes.members.removed.is_empty() {
            let step = self
                .delete_group_chat_members_with(&mut runner, chat_id, &changes.members.removed)
                .await;
            step.map_err(|e| runner.abort(e))?;
        }

        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok_body(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 0,
            "msg": "success",
            "data": data
        }))
    }

    fn ids(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[tokio::test]
    async fn test_list_group_chat_members_walks_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(query_param("page_token", "p2"))
            .respond_with(ok_body(serde_json::json!({
                "items": [{"member_id": "ou_2", "member_id_type": "open_id", "name": "B"}],
                "page_token": "",
                "has_more": false,
                "member_total": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(query_param("page_size", "100"))
            .respond_with(ok_body(serde_json::json!({
                "items": [{"member_id": "ou_1", "member_id_type": "open_id", "name": "A"}],
                "page_token": "p2",
                "has_more": true,
                "member_total": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let members = client.list_group_chat_members("oc_1").await.unwrap();

        let ids: Vec<&str> = members.iter().map(|m| m.member_id.as_str()).collect();
        assert_eq!(ids, vec!["ou_1", "ou_2"]);
    }

    #[tokio::test]
    async fn test_add_members_chunks_bots_and_persons() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(query_param("succeed_type", "2"))
            .and(query_param("member_id_type", "app_id"))
            .respond_with(ok_body(serde_json::json!({"invalid_id_list": []})))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(query_param("succeed_type", "2"))
            .respond_with(ok_body(serde_json::json!({
                "invalid_id_list": [],
                "pending_approval_id_list": ["ou_0"]
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut all = ids("cli_", 7);
        all.extend(ids("ou_", 51));

        let client = LarkClient::test_client(&mock_server.uri());
        let result = client.add_group_chat_members("oc_1", &all).await.unwrap();

        assert_eq!(result.pending_approval_id_list, vec!["ou_0", "ou_0"]);

        let requests = mock_server.received_requests().await.unwrap();
        let bot_query = requests[0].url.query().unwrap_or_default().to_string();
        assert_eq!(bot_query, "succeed_type=2&member_id_type=app_id");
        let second_bot_query = requests[1].url.query().unwrap_or_default().to_string();
        assert_eq!(second_bot_query, bot_query);
        let person_body: serde_json::Value = serde_json::from_slice(&requests[2].body).unwrap();
        assert_eq!(person_body["id_list"].as_array().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_add_members_rejects_unknown_prefix_before_sending() {
        let mock_server = MockServer::start().await;
        let client = LarkClient::test_client(&mock_server.uri());

        let err = client
            .add_group_chat_members("oc_1", &["on_1".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::Validation(_)));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_members_reports_invalid_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(body_json(serde_json::json!({"id_list": ["ou_1", "ou_2"]})))
            .respond_with(ok_body(serde_json::json!({"invalid_id_list": ["ou_2"]})))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client
            .delete_group_chat_members("oc_1", &["ou_1".to_string(), "ou_2".to_string()])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid ID list, ou_2");
    }

    #[tokio::test]
    async fn test_add_administrators_limit() {
        let mock_server = MockServer::start().await;
        let client = LarkClient::test_client(&mock_server.uri());

        let err = client
            .add_group_chat_administrators("oc_1", &ids("ou_", 11))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("max 10 administrators"));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_administrators() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/managers/delete_managers"))
            .and(body_json(serde_json::json!({"manager_ids": ["ou_1"]})))
            .respond_with(ok_body(serde_json::json!({
                "chat_managers": [],
                "chat_bot_managers": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        client
            .delete_group_chat_administrators("oc_1", &["ou_1".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sync_runs_steps_in_order() {
        let mock_server = MockServer::start().await;

        for (verb, route) in [
            ("POST", "/im/v1/chats/oc_1/members"),
            ("POST", "/im/v1/chats/oc_1/managers/add_managers"),
            ("POST", "/im/v1/chats/oc_1/managers/delete_managers"),
            ("DELETE", "/im/v1/chats/oc_1/members"),
        ] {
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(ok_body(serde_json::json!({})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let current = ChatMembership {
            members: vec!["ou_1".to_string(), "ou_2".to_string()],
            administrators: vec!["ou_2".to_string()],
        };
        let desired = ChatMembership {
            members: vec!["ou_1".to_string(), "ou_3".to_string()],
            administrators: vec!["ou_1".to_string()],
        };

        let client = LarkClient::test_client(&mock_server.uri());
        let changes = client
            .sync_group_chat_members("oc_1", &current, &desired)
            .await
            .unwrap();

        assert_eq!(changes.members.added, vec!["ou_3"]);
        assert_eq!(changes.members.removed, vec!["ou_2"]);
        assert_eq!(changes.administrators.added, vec!["ou_1"]);
        assert_eq!(changes.administrators.removed, vec!["ou_2"]);

        let order: Vec<String> = mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect();
        assert_eq!(
            order,
            vec![
                "POST /im/v1/chats/oc_1/members",
                "POST /im/v1/chats/oc_1/managers/add_managers",
                "POST /im/v1/chats/oc_1/managers/delete_managers",
                "DELETE /im/v1/chats/oc_1/members",
            ]
        );
    }

    #[tokio::test]
    async fn test_sync_requires_administrators_to_be_members() {
        let mock_server = MockServer::start().await;
        let client = LarkClient::test_client(&mock_server.uri());

        let desired = ChatMembership {
            members: vec!["ou_1".to_string()],
            administrators: vec!["ou_9".to_string()],
        };
        let err = client
            .sync_group_chat_members("oc_1", &ChatMembership::default(), &desired)
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::Validation(_)));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sync_failure_reports_applied_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/members"))
            .respond_with(ok_body(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/managers/add_managers"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 232014,
                "msg": "no permission"
            })))
            .mount(&mock_server)
            .await;

        let desired = ChatMembership {
            members: vec!["ou_1".to_string()],
            administrators: vec!["ou_1".to_string()],
        };

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client
            .sync_group_chat_members("oc_1", &ChatMembership::default(), &desired)
            .await
            .unwrap_err();

        match err {
            LarkError::PartialBatch { applied, source } => {
                assert_eq!(applied, vec!["ou_1"]);
                assert!(matches!(*source, LarkError::Api { code: 232014, .. }));
            }
            other => panic!("Expected PartialBatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sync_invalid_removal_keeps_earlier_additions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/members"))
            .and(body_json(serde_json::json!({"id_list": ["ou_new"]})))
            .respond_with(ok_body(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/im/v1/chats/oc_1/members"))
            .respond_with(ok_body(serde_json::json!({"invalid_id_list": ["ou_old"]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let current = ChatMembership {
            members: vec!["ou_old".to_string()],
            administrators: vec![],
        };
        let desired = ChatMembership {
            members: vec!["ou_new".to_string()],
            administrators: vec![],
        };

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client
            .sync_group_chat_members("oc_1", &current, &desired)
            .await
            .unwrap_err();

        match err {
            LarkError::PartialBatch { applied, source } => {
                assert_eq!(applied, vec!["ou_new"]);
                assert_eq!(source.to_string(), "invalid ID list, ou_old");
            }
            other => panic!("Expected PartialBatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sync_bad_prefix_in_later_step_keeps_earlier_additions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/im/v1/chats/oc_1/members"))
            .respond_with(ok_body(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let current = ChatMembership {
            members: vec!["on_union".to_string()],
            administrators: vec![],
        };
        let desired = ChatMembership {
            members: vec!["ou_new".to_string()],
            administrators: vec![],
        };

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client
            .sync_group_chat_members("oc_1", &current, &desired)
            .await
            .unwrap_err();

        match err {
            LarkError::PartialBatch { applied, source } => {
                assert_eq!(applied, vec!["ou_new"]);
                assert!(source.to_string().contains("invalid administrator ID"));
            }
            other => panic!("Expected PartialBatch, got {:?}", other),
        }
    }
}
