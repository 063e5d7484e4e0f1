//! User API operations

use futures::stream::{self, StreamExt};
use log::{debug, info};
use std::collections::HashSet;

use crate::config::{api, batch};
use crate::error::{LarkError, Result};
use crate::lark::client::{LarkClient, NO_BODY};
use crate::lark::models::UserIdType;
use crate::lark::pagination::ApiResponse;
use crate::lark::transport::HttpMethod;
use crate::lark::validation::validate_non_empty_ids;

use super::models::{User, UserBatchData, UserIdByEmail, UserIdByEmailData, UserIdByEmailRequest};

impl LarkClient {
    /// Look up users by ID, 50 IDs per request
    ///
    /// Chunks are fetched concurrently; results keep the order of `ids`
    /// chunk by chunk. Unknown IDs are simply absent from the result.
    pub async fn get_users_by_ids(&self, ids: &[String], id_type: UserIdType) -> Result<Vec<User>> {
        let requests = ids.chunks(api::USER_BATCH_LIMIT).map(|chunk| {
            let query: Vec<String> = chunk
                .iter()
                .map(|id| format!("user_ids={}", urlencoding::encode(id)))
                .collect();
            let path = format!(
                "{}/batch?{}&user_id_type={}",
                api::USERS,
                query.join("&"),
                id_type
            );
            async move {
                debug!("Fetching users from: {}", path);
                let response: ApiResponse<UserBatchData> =
                    self.tenant_request(HttpMethod::Get, &path, NO_BODY).await?;
                Ok::<_, LarkError>(response.into_data().items)
            }
        });

        let chunks: Vec<Result<Vec<User>>> = stream::iter(requests)
            .buffered(api::MAX_CONCURRENT_REQUESTS)
            .collect()
            .await;

        let mut users = Vec::with_capacity(ids.len());
        for chunk in chunks {
            users.extend(chunk?);
        }
        info!("Retrieved {} of {} user(s)", users.len(), ids.len());
        Ok(users)
    }

    /// Resolve emails to user IDs
    pub async fn get_user_ids_by_emails(&self, emails: &[String]) -> Result<Vec<UserIdByEmail>> {
        let path = format!("{}/batch_get_id", api::USERS);
        let response: ApiResponse<UserIdByEmailData> = self
            .tenant_request(
                HttpMethod::Post,
                &path,
                Some(&UserIdByEmailRequest { emails }),
            )
            .await?;
        Ok(response.into_data().user_list)
    }

    /// Ensure every ID names an existing user
    ///
    /// With `skip_bots`, application IDs (`cli_` prefix) are accepted without
    /// a lookup.
    pub async fn validate_user_ids(
        &self,
        ids: &[String],
        id_type: UserIdType,
        skip_bots: bool,
    ) -> Result<()> {
        validate_non_empty_ids(ids)?;

        let lookup: Vec<String> = ids
            .iter()
            .filter(|id| !(skip_bots && id.starts_with(batch::BOT_PREFIX)))
            .cloned()
            .collect();
        if lookup.is_empty() {
            return Ok(());
        }

        let users = self
            .get_users_by_ids(&lookup, id_type)
            .await
            .map_err(|e| LarkError::Validation(format!("Error validating IDs: {}", e)))?;

        let found: HashSet<&str> = users.iter().map(|u| u.id_of(id_type)).collect();
        let missing: Vec<&str> = lookup
            .iter()
            .map(String::as_str)
            .filter(|id| !found.contains(id))
            .collect();
        if !missing.is_empty() {
            return Err(LarkError::NotFound(format!(
                "User(s) not found for {}: {}",
                id_type,
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_users_by_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact/v3/users/batch"))
            .and(query_param("user_id_type", "user_id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {"items": [
                    {"user_id": "u1", "open_id": "ou_1", "name": "Ann"},
                    {"user_id": "u2", "open_id": "ou_2", "name": "Bo"}
                ]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let users = client
            .get_users_by_ids(&["u1".to_string(), "u2".to_string()], UserIdType::UserId)
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].open_id, "ou_2");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("user_ids=u1&user_ids=u2&user_id_type=user_id")
        );
    }

    #[tokio::test]
    async fn test_get_users_splits_large_lookups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact/v3/users/batch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {"items": []}
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let ids: Vec<String> = (0..51).map(|i| format!("ou_{}", i)).collect();
        let client = LarkClient::test_client(&mock_server.uri());
        assert!(client
            .get_users_by_ids(&ids, UserIdType::OpenId)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_user_ids_by_emails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contact/v3/users/batch_get_id"))
            .and(body_json(serde_json::json!({"emails": ["a@example.com"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {"user_list": [{"user_id": "ou_1", "email": "a@example.com"}]}
            })))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let users = client
            .get_user_ids_by_emails(&["a@example.com".to_string()])
            .await
            .unwrap();
        assert_eq!(users[0].user_id, "ou_1");
    }

    #[tokio::test]
    async fn test_validate_user_ids_skips_bots_and_reports_missing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contact/v3/users/batch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {"items": [{"open_id": "ou_1"}]}
            })))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        client
            .validate_user_ids(
                &["ou_1".to_string(), "cli_bot".to_string()],
                UserIdType::OpenId,
                true,
            )
            .await
            .unwrap();

        let err = client
            .validate_user_ids(&["ou_1".to_string(), "ou_9".to_string()], UserIdType::OpenId, false)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User(s) not found for open_id: ou_9");
    }

    #[tokio::test]
    async fn test_validate_user_ids_only_bots_needs_no_request() {
        let mock_server = MockServer::start().await;
        let client = LarkClient::test_client(&mock_server.uri());

        client
            .validate_user_ids(&["cli_bot".to_string()], UserIdType::OpenId, true)
            .await
            .unwrap();
        assert!(mock_server.received_requests().await.unwrap().is_empty());

        let err = client
            .validate_user_ids(&["".to_string()], UserIdType::OpenId, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "ID cannot be empty");
    }
}
