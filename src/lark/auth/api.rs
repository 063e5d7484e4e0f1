//! Access token API operations

use log::info;

use crate::config::api;
use crate::error::{LarkError, Result};
use crate::lark::client::{AccessTokens, ClientConfig, LarkClient};
use crate::lark::transport::HttpMethod;

use super::models::{AccessTokenRequest, AccessTokenResponse};

impl LarkClient {
    /// Exchange app credentials for tenant and app access tokens
    pub async fn fetch_access_tokens(&self, app_secret: &str) -> Result<AccessTokenResponse> {
        info!("Getting access token from Lark API");

        let request = AccessTokenRequest {
            app_id: self.app_id().to_string(),
            app_secret: app_secret.to_string(),
        };

        let response: AccessTokenResponse = self
            .initialize_request(HttpMethod::Post, api::AUTH, Some(&request))
            .await
            .map_err(|e| match e {
                LarkError::Api { code, message } => LarkError::Credentials(format!(
                    "failed to get access token: API error: code={}, message={}",
                    code, message
                )),
                other => other,
            })?;

        info!(
            "Access token retrieved successfully (expires in {}s)",
            response.expire
        );
        Ok(response)
    }

    /// Build a client holding fresh tokens for `app_id`
    pub async fn authenticate(
        app_id: &str,
        app_secret: &str,
        config: ClientConfig,
    ) -> Result<LarkClient> {
        let bootstrap = LarkClient::new(app_id, AccessTokens::default(), config);
        bootstrap.login(app_secret).await
    }

    /// Same client, carrying the tokens issued for its app
    pub async fn login(&self, app_secret: &str) -> Result<LarkClient> {
        let response = self.fetch_access_tokens(app_secret).await?;
        Ok(self.with_tokens(AccessTokens {
            tenant: response.tenant_access_token,
            app: response.app_access_token,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_stores_both_tokens() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v3/tenant_access_token/internal"))
            .and(body_json(serde_json::json!({
                "app_id": "cli_test_app",
                "app_secret": "s3cret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "msg": "ok",
                "tenant_access_token": "t-abc",
                "app_access_token": "a-abc",
                "expire": 7200
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let logged_in = client.login("s3cret").await.unwrap();

        assert_eq!(logged_in.tokens().tenant, "t-abc");
        assert_eq!(logged_in.tokens().app, "a-abc");
    }

    #[tokio::test]
    async fn test_token_request_carries_no_authorization() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v3/tenant_access_token/internal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "tenant_access_token": "t",
                "app_access_token": "a",
                "expire": 10
            })))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        client.fetch_access_tokens("x").await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v3/tenant_access_token/internal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 10003,
                "msg": "invalid param"
            })))
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let err = client.fetch_access_tokens("wrong").await.unwrap_err();

        assert!(matches!(err, LarkError::Credentials(_)));
        assert!(err.to_string().contains("code=10003"));
    }
}
