//! App credential resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{LarkError, Result};

/// Credentials file structure
#[derive(Deserialize, Debug, Default)]
struct CredentialsFile {
    #[serde(default)]
    app_id: Option<String>,
    #[serde(default)]
    app_secret: Option<String>,
}

/// Resolved application credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCredentials {
    pub app_id: String,
    pub app_secret: String,
}

/// Credential resolution with fallback logic
pub struct CredentialsResolver {
    file_path: Option<PathBuf>,
}

impl CredentialsResolver {
    /// Resolver reading the default credentials file
    pub fn new() -> Self {
        Self {
            file_path: Self::default_credentials_path(),
        }
    }

    /// Resolver reading a specific credentials file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
        }
    }

    /// Resolve each credential from the first source that has it:
    /// 1. CLI argument
    /// 2. Environment variable (LARK_APP_ID, LARK_APP_SECRET)
    /// 3. Credentials file (~/.config/larkctl/credentials.json)
    pub fn resolve(
        &self,
        cli_app_id: Option<&str>,
        cli_app_secret: Option<&str>,
    ) -> Result<AppCredentials> {
        let mut file: Option<CredentialsFile> = None;

        let app_id = match Self::from_cli_or_env(cli_app_id, credentials::APP_ID_ENV) {
            Some(value) => value,
            None => self
                .load_file(&mut file)?
                .app_id
                .clone()
                .ok_or_else(|| LarkError::Credentials(self.not_found_message("app ID")))?,
        };

        let app_secret = match Self::from_cli_or_env(cli_app_secret, credentials::APP_SECRET_ENV)
        {
            Some(value) => value,
            None => self
                .load_file(&mut file)?
                .app_secret
                .clone()
                .ok_or_else(|| LarkError::Credentials(self.not_found_message("app secret")))?,
        };

        Ok(AppCredentials { app_id, app_secret })
    }

    fn from_cli_or_env(cli_value: Option<&str>, env_var: &str) -> Option<String> {
        if let Some(value) = cli_value.filter(|v| !v.is_empty()) {
            debug!("Using {} from CLI argument", env_var);
            return Some(value.to_string());
        }
        match std::env::var(env_var) {
            Ok(value) if !value.is_empty() => {
                debug!("Using {} from environment", env_var);
                Some(value)
            }
            _ => None,
        }
    }

    /// Read the credentials file once; a missing file reads as empty
    fn load_file<'a>(&self, cache: &'a mut Option<CredentialsFile>) -> Result<&'a CredentialsFile> {
        if cache.is_none() {
            *cache = Some(self.read_credentials_file()?);
        }
        Ok(cache.get_or_insert_with(CredentialsFile::default))
    }

    fn read_credentials_file(&self) -> Result<CredentialsFile> {
        let Some(path) = self.file_path.as_deref() else {
            return Ok(CredentialsFile::default());
        };

        debug!("Looking for credentials file at: {}", path.display());
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Credentials file not readable: {}", e);
                return Ok(CredentialsFile::default());
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            LarkError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate helpful error message when a credential is missing
    fn not_found_message(&self, what: &str) -> String {
        let file_info = self
            .file_path
            .as_deref()
            .map(|p: &Path| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No {} found. Please provide credentials using one of:\n\
             \n\
             1. CLI arguments:     larkctl --app-id <ID> --app-secret <SECRET>\n\
             2. Environment vars:  export {}=<ID> {}=<SECRET>\n\
             3. Credentials file:  {{\"app_id\": \"...\", \"app_secret\": \"...\"}}\n\
             \n\
             Checked: CLI, env vars [{}, {}]{}",
            what,
            credentials::APP_ID_ENV,
            credentials::APP_SECRET_ENV,
            credentials::APP_ID_ENV,
            credentials::APP_SECRET_ENV,
            file_info
        )
    }

    /// `<config dir>/larkctl/credentials.json`
    fn default_credentials_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}

impl Default for CredentialsResolver {
    fn default() -> Self {
        Self::new()
    }
}
