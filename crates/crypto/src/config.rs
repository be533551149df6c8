//! Credentials and endpoint settings for signing speech API requests.
//!
//! Both types deserialize from whatever config format the calling client uses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CryptoError, Result};

/// Default host for the streaming dictation API.
pub const DEFAULT_HOST: &str = "iat-api.xfyun.cn";

/// Default request path for the streaming dictation API.
pub const DEFAULT_PATH: &str = "/v2/iat";

/// Application credentials issued by the speech platform console.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Application ID
    pub app_id: String,
    /// API key, used as the HMAC key for real-time transcription
    pub api_key: String,
    /// API secret, used as the HMAC key for the WebSocket APIs
    #[serde(default)]
    pub api_secret: String,
}

impl Credentials {
    /// Create credentials from their parts.
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Check the fields needed for real-time transcription signing.
    pub fn validate_for_rtasr(&self) -> Result<()> {
        require("app_id", &self.app_id)?;
        require("api_key", &self.api_key)
    }

    /// Check the fields needed for WebSocket authorization URLs.
    pub fn validate(&self) -> Result<()> {
        require("api_key", &self.api_key)?;
        require("api_secret", &self.api_secret)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CryptoError::InvalidCredentials(format!("{field} is empty")));
    }
    Ok(())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Host and path a WebSocket request is signed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    /// Host name, without scheme
    pub host: String,
    /// Request path, starting with `/`
    pub path: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl Endpoint {
    /// Create an endpoint from host and path.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }

    /// Reject endpoints that cannot appear in a signed request line.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() || self.host.contains(['/', ' ', '\n']) {
            return Err(CryptoError::InvalidEndpoint(format!(
                "host '{}' is not a bare host name",
                self.host
            )));
        }
        if !self.path.starts_with('/') || self.path.contains([' ', '\n']) {
            return Err(CryptoError::InvalidEndpoint(format!(
                "path '{}' must start with '/' and contain no whitespace",
                self.path
            )));
        }
        Ok(())
    }
}
