//! Lark HTTP client: token selection, JSON bodies, bounded retries

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::{api, retry};
use crate::error::{LarkError, Result};
use crate::lark::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Placeholder for requests without a body
pub(crate) const NO_BODY: Option<&()> = None;

/// Which bearer token (if any) a request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// No Authorization header (token bootstrap)
    None,
    /// Tenant access token
    Tenant,
    /// App access token
    App,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::None => "",
            TokenKind::Tenant => "tenant_access_token",
            TokenKind::App => "app_access_token",
        }
    }
}

impl FromStr for TokenKind {
    type Err = LarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(TokenKind::None),
            "tenant_access_token" => Ok(TokenKind::Tenant),
            "app_access_token" => Ok(TokenKind::App),
            other => Err(LarkError::InvalidTokenKind(other.to_string())),
        }
    }
}

/// Bounded exponential backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per logical request (at least one is always made)
    pub max_attempts: u32,
    /// Wait before the second attempt; doubled for each later one
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay before attempt `attempt` (zero-based); zero for the first one
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt - 1))
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retry::BASE_RETRY_COUNT,
            base_delay: Duration::from_secs(retry::BASE_DELAY_SECS),
        }
    }
}

/// Immutable engine configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Long-lived bearer credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTokens {
    pub tenant: String,
    pub app: String,
}

/// Minimum envelope carried by every Lark response
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
}

/// Lark API client
#[derive(Clone)]
pub struct LarkClient {
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
    tokens: AccessTokens,
    app_id: String,
    cancel: CancellationToken,
}

impl LarkClient {
    /// Create a client backed by the default `reqwest` transport
    pub fn new(app_id: &str, tokens: AccessTokens, config: ClientConfig) -> Self {
        Self::with_transport(app_id, tokens, config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport
    pub fn with_transport(
        app_id: &str,
        tokens: AccessTokens,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            config,
            tokens,
            app_id: app_id.to_string(),
            cancel: CancellationToken::new(),
        }
    }

    /// Same client with different tokens (shares transport and cancellation)
    pub fn with_tokens(&self, tokens: AccessTokens) -> Self {
        Self {
            tokens,
            ..self.clone()
        }
    }

    /// Application ID this client authenticates as
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &AccessTokens {
        &self.tokens
    }

    /// Token that aborts pending backoff waits and in-flight sends
    ///
    /// The token belongs to the client, not to one call: once cancelled,
    /// every later request on this client and on clients derived from it
    /// with [`LarkClient::with_tokens`] fails with [`LarkError::Cancelled`].
    /// Build a new client to issue requests again.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn token_for(&self, kind: TokenKind) -> Option<&str> {
        match kind {
            TokenKind::None => None,
            TokenKind::Tenant => Some(&self.tokens.tenant),
            TokenKind::App => Some(&self.tokens.app),
        }
    }

    /// Request without a token (token bootstrap)
    pub async fn initialize_request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(method, path, body, TokenKind::None).await
    }

    /// Request authenticated with the tenant access token
    pub async fn tenant_request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(method, path, body, TokenKind::Tenant).await
    }

    /// Request authenticated with the app access token
    pub async fn app_request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(method, path, body, TokenKind::App).await
    }

    /// Issue a request and decode the success body into `R`
    pub async fn execute<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        token: TokenKind,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.execute_raw(method, path, body, token).await?;
        serde_json::from_slice(&response.body).map_err(|e| LarkError::Decode(e.to_string()))
    }

    /// Issue a request and discard the success body
    pub async fn execute_unit<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        token: TokenKind,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute_raw(method, path, body, token).await.map(|_| ())
    }

    /// Retry loop shared by every request
    ///
    /// Only transient transport failures are retried; API errors, decode
    /// errors and request construction errors return on first occurrence.
    async fn execute_raw<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        token: TokenKind,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body, token)?;
        let attempts = self.config.retry.attempts();
        let mut last_error = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.config.retry.delay_for_attempt(attempt);
                debug!(
                    "Retrying {} {} in {:?} (attempt {}/{})",
                    method,
                    path,
                    delay,
                    attempt + 1,
                    attempts
                );
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => return Err(LarkError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }

            match self.send_once(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() => {
                    warn!("Transient error on {} {}: {}", method, path, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(LarkError::RetriesExhausted {
            retries: attempts,
            last: Box::new(last_error.unwrap_or(LarkError::Cancelled)),
        })
    }

    fn build_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        token: TokenKind,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| LarkError::Serialization(e.to_string()))?;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.token_for(token) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers,
            body,
        })
    }

    /// One attempt: send, then classify the status and envelope
    async fn send_once(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(LarkError::Cancelled),
            result = self.transport.send(request) => result?,
        };

        if response.status >= 400 {
            return match serde_json::from_slice::<BaseResponse>(&response.body) {
                Ok(envelope) => Err(LarkError::Api {
                    code: envelope.code,
                    message: envelope.msg,
                }),
                Err(_) => Err(LarkError::ErrorStatus(response.status)),
            };
        }

        // Bodies that are not an envelope fall through to the caller's decode
        if let Ok(envelope) = serde_json::from_slice::<BaseResponse>(&response.body) {
            if envelope.code != 0 {
                return Err(LarkError::Api {
                    code: envelope.code,
                    message: envelope.msg,
                });
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
impl LarkClient {
    /// Client pointed at a mock server, with instant retries
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            "cli_test_app",
            AccessTokens {
                tenant: "tenant-token".to_string(),
                app: "app-token".to_string(),
            },
            ClientConfig {
                base_url: base_url.to_string(),
                retry: RetryPolicy::new(2, Duration::ZERO),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lark::transport::fake::ScriptedTransport;
    use std::time::Instant;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Message {
        message: String,
    }

    fn scripted_client(
        transport: Arc<ScriptedTransport>,
        attempts: u32,
        delay: Duration,
    ) -> LarkClient {
        LarkClient::with_transport(
            "cli_app",
            AccessTokens {
                tenant: "tenant-token".to_string(),
                app: "app-token".to_string(),
            },
            ClientConfig {
                base_url: "http://lark.test".to_string(),
                retry: RetryPolicy::new(attempts, delay),
            },
            transport,
        )
    }

    #[test]
    fn test_token_kind_from_str() {
        assert_eq!("".parse::<TokenKind>().unwrap(), TokenKind::None);
        assert_eq!(
            "tenant_access_token".parse::<TokenKind>().unwrap(),
            TokenKind::Tenant
        );
        assert_eq!(
            "app_access_token".parse::<TokenKind>().unwrap(),
            TokenKind::App
        );
        let err = "user_access_token".parse::<TokenKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid authorization header: user_access_token"
        );
    }

    #[test]
    fn test_token_kind_round_trips_through_str() {
        for kind in [TokenKind::None, TokenKind::Tenant, TokenKind::App] {
            assert_eq!(kind.as_str().parse::<TokenKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_backoff_doubles_from_base_delay() {
        let policy = RetryPolicy::new(5, Duration::from_secs(1));
        assert_eq!(policy.delay_for_attempt(0), Duration::ZERO);
        assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_secs(4));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(100, Duration::from_secs(1));
        // Must not panic on overflow
        let _ = policy.delay_for_attempt(90);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, api::BASE_URL);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.base_delay, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_tenant_request_decodes_success_body() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            serde_json::json!({"message": "success"}),
        )]));
        let client = scripted_client(transport.clone(), 2, Duration::ZERO);

        let dst: Message = client
            .tenant_request(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap();

        assert_eq!(dst.message, "success");
        assert_eq!(transport.calls(), 1);

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://lark.test/test");
        assert_eq!(request.header("Authorization"), Some("Bearer tenant-token"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::json(
            400,
            serde_json::json!({"code": 400, "msg": "bad request"}),
        )]));
        let client = scripted_client(transport.clone(), 3, Duration::ZERO);

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("code=400"));
        assert!(msg.contains("message=bad request"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_error_body_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::raw(
            502,
            "<html>Bad Gateway</html>",
        )]));
        let client = scripted_client(transport.clone(), 3, Duration::ZERO);

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::ErrorStatus(502)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_zero_code_on_success_status_is_api_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            serde_json::json!({"code": 99991663, "msg": "invalid tenant token"}),
        )]));
        let client = scripted_client(transport.clone(), 2, Duration::ZERO);

        let err = client
            .tenant_request::<_, BaseResponse>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        match err {
            LarkError::Api { code, message } => {
                assert_eq!(code, 99991663);
                assert_eq!(message, "invalid tenant token");
            }
            other => panic!("Expected LarkError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_failure_is_fatal() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::raw(
            200, "not json",
        )]));
        let client = scripted_client(transport.clone(), 3, Duration::ZERO);

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::Decode(_)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_unit_ignores_body_shape() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::raw(200, "")]));
        let client = scripted_client(transport.clone(), 1, Duration::ZERO);

        client
            .execute_unit(HttpMethod::Delete, "/x", NO_BODY, TokenKind::Tenant)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_transient_failures_then_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::fail("connection refused"),
            ScriptedTransport::fail("read: connection reset by peer"),
            ScriptedTransport::json(200, serde_json::json!({"message": "ok"})),
        ]));
        let client = scripted_client(transport.clone(), 3, Duration::from_millis(1));

        let dst: Message = client
            .tenant_request(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap();

        assert_eq!(dst.message, "ok");
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_retries_exhausted_wraps_last_transient_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::fail("connection refused"),
            ScriptedTransport::fail("unexpected EOF"),
            ScriptedTransport::json(200, serde_json::json!({"message": "too late"})),
        ]));
        let client = scripted_client(transport.clone(), 2, Duration::from_millis(1));

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        match &err {
            LarkError::RetriesExhausted { retries, last } => {
                assert_eq!(*retries, 2);
                assert!(last.to_string().contains("unexpected EOF"));
            }
            other => panic!("Expected RetriesExhausted, got {:?}", other),
        }
        assert!(err.to_string().starts_with("failed after 2 retries"));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_non_transient_transport_error_returns_immediately() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::fail("invalid peer certificate"),
            ScriptedTransport::json(200, serde_json::json!({"message": "unreachable"})),
        ]));
        let client = scripted_client(transport.clone(), 3, Duration::from_millis(1));

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("invalid peer certificate"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_backoff_waits_between_attempts() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::fail("timeout"),
            ScriptedTransport::fail("timeout"),
            ScriptedTransport::json(200, serde_json::json!({"message": "ok"})),
        ]));
        let client = scripted_client(transport.clone(), 3, Duration::from_millis(20));

        let started = Instant::now();
        let _: Message = client
            .tenant_request(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap();

        // 20ms before attempt 2, 40ms before attempt 3
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_cancel_during_backoff_stops_retrying() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::fail("connection refused"),
            ScriptedTransport::json(200, serde_json::json!({"message": "never"})),
        ]));
        let client = scripted_client(transport.clone(), 3, Duration::from_secs(60));

        let cancel = client.cancellation_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            cancel.cancel();
        });

        let started = Instant::now();
        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::Cancelled));
        assert_eq!(transport.calls(), 1);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_refused_connection_is_retried_until_exhausted() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = LarkClient::new(
            "cli_app",
            AccessTokens::default(),
            ClientConfig {
                base_url: format!("http://{}", addr),
                retry: RetryPolicy::new(3, Duration::from_millis(1)),
            },
        );

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap_err();

        match &err {
            LarkError::RetriesExhausted { retries, last } => {
                assert_eq!(*retries, 3);
                assert!(matches!(**last, LarkError::Transport(_)));
            }
            other => panic!("Expected RetriesExhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unserializable_body_is_fatal_before_sending() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            serde_json::json!({"message": "unreachable"}),
        )]));
        let client = scripted_client(transport.clone(), 3, Duration::ZERO);

        // JSON object keys must be strings
        let mut body = std::collections::BTreeMap::new();
        body.insert((1, 2), "value");

        let err = client
            .tenant_request::<_, Message>(HttpMethod::Post, "/test", Some(&body))
            .await
            .unwrap_err();

        assert!(matches!(err, LarkError::Serialization(_)));
        assert!(err.to_string().starts_with("error marshaling request"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_sends_once() {
        let transport = Arc::new(ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            serde_json::json!({"message": "ok"}),
        )]));
        let client = scripted_client(transport.clone(), 0, Duration::ZERO);

        let _: Message = client
            .tenant_request(HttpMethod::Get, "/test", NO_BODY)
            .await
            .unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_token_selection() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::json(200, serde_json::json!({})),
            ScriptedTransport::json(200, serde_json::json!({})),
        ]));
        let client = scripted_client(transport.clone(), 1, Duration::ZERO);

        let _: BaseResponse = client
            .app_request(HttpMethod::Get, "/a", NO_BODY)
            .await
            .unwrap();
        let _: BaseResponse = client
            .initialize_request(HttpMethod::Post, "/b", Some(&serde_json::json!({"k": "v"})))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer app-token"));
        assert_eq!(requests[1].header("Authorization"), None);
        assert_eq!(requests[1].body.as_deref(), Some(br#"{"k":"v"}"#.as_slice()));
    }

    #[tokio::test]
    async fn test_with_tokens_keeps_config() {
        let client = LarkClient::test_client("http://localhost:1");
        let updated = client.with_tokens(AccessTokens {
            tenant: "t2".to_string(),
            app: "a2".to_string(),
        });
        assert_eq!(updated.tokens().tenant, "t2");
        assert_eq!(updated.app_id(), "cli_test_app");
        assert_eq!(updated.config().base_url, "http://localhost:1");
    }

    #[tokio::test]
    async fn test_cancelled_client_stays_cancelled() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ScriptedTransport::json(200, serde_json::json!({"message": "ok"})),
            ScriptedTransport::json(200, serde_json::json!({"message": "ok"})),
        ]));
        let client = scripted_client(transport.clone(), 1, Duration::ZERO);
        let derived = client.with_tokens(AccessTokens::default());

        client.cancellation_token().cancel();

        for c in [&client, &derived] {
            let err = c
                .tenant_request::<_, Message>(HttpMethod::Get, "/test", NO_BODY)
                .await
                .unwrap_err();
            assert!(matches!(err, LarkError::Cancelled));
        }
    }

    #[tokio::test]
    async fn test_end_to_end_against_mock_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/im/v1/chats/oc_1"))
            .and(header("Authorization", "Bearer tenant-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"code": 0, "msg": "success"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = LarkClient::test_client(&mock_server.uri());
        let response: BaseResponse = client
            .tenant_request(
                HttpMethod::Put,
                "/im/v1/chats/oc_1",
                Some(&serde_json::json!({"name": "ops"})),
            )
            .await
            .unwrap();

        assert_eq!(response.msg, "success");
    }
}
