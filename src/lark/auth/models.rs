//! Access token data models

use serde::{Deserialize, Serialize};

/// Credentials posted to the token endpoint
#[derive(Serialize, Debug, Clone)]
pub struct AccessTokenRequest {
    pub app_id: String,
    pub app_secret: String,
}

/// Token endpoint response (fields sit beside the envelope, not under `data`)
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub tenant_access_token: String,
    #[serde(default)]
    pub app_access_token: String,
    /// Seconds until both tokens expire
    #[serde(default)]
    pub expire: i64,
}
