use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::request::ResponseFormat;

/// Environment variable holding the path to the credentials JSON file.
pub const CREDENTIALS_ENV_VAR: &str = "YANDEX_API_CREDENTIALS";

pub const DEFAULT_BASE_URL: &str = "https://translate.yandex.net/api";
pub const DEFAULT_API_VERSION: &str = "v1.5";

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Load credentials from the file named by `YANDEX_API_CREDENTIALS`.
    pub fn discover() -> Result<Self> {
        let path = std::env::var(CREDENTIALS_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingCredentialsVar(CREDENTIALS_ENV_VAR))?;
        Self::from_file(path)
    }

    /// Load credentials from a JSON file of shape `{"api_key": "..."}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let creds: Credentials =
            serde_json::from_slice(&data).map_err(|source| Error::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;

        if creds.api_key.is_empty() {
            return Err(Error::EmptyApiKey);
        }

        debug!("Loaded credentials from {}", path.display());
        Ok(creds)
    }
}

// Never print the key itself.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Endpoint settings for the remote service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_version: String,
    pub response_format: ResponseFormat,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("YANDEX_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_version: std::env::var("YANDEX_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            response_format: ResponseFormat::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            response_format: ResponseFormat::default(),
        }
    }
}
