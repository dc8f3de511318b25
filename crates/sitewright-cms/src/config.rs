//! # CMS Client Configuration
//!
//! Connection settings for the CMS delivery API. The API token never
//! appears in `Debug` output.

use url::Url;

/// Configuration for [`crate::CmsClient`].
#[derive(Clone)]
pub struct CmsConfig {
    /// Base URL of the delivery API, normalized to end with `/` so
    /// endpoint paths join cleanly.
    pub base_url: Url,
    /// Bearer token for the delivery API. `None` for unauthenticated
    /// (preview/local) instances.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CmsConfig {
    /// Build a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or
    /// cannot serve as a base (e.g. `data:` URLs).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        // Normalize: a trailing slash keeps Url::join from dropping the
        // last path segment of the base.
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(Self {
            base_url: url,
            api_token: None,
            timeout_secs: 10,
        })
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Errors building a [`CmsConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL did not parse or cannot be used as a base.
    #[error("invalid CMS base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The API token contains bytes that cannot appear in a header value.
    #[error("API token is not a valid header value")]
    InvalidToken,
}
