//! API key credentials.
//!
//! The API key is redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};
use crate::DEFAULT_BASE_URL;

/// Affinity API credentials: an API key and the base endpoint URL.
///
/// Affinity authenticates with HTTP Basic auth using an empty username and the
/// API key as password.
#[derive(Clone)]
pub struct AffinityCredentials {
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for AffinityCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffinityCredentials")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AffinityCredentials {
    /// Create credentials for the default Affinity host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base endpoint URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `AFFINITY_API_KEY`
    ///
    /// Optional:
    /// - `AFFINITY_BASE_URL` (default: `https://api.affinity.vc`)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("AFFINITY_API_KEY")
            .map_err(|_| Error::new(ErrorKind::EnvVar("AFFINITY_API_KEY".to_string())))?;

        let mut creds = Self::new(api_key);
        if let Ok(base_url) = std::env::var("AFFINITY_BASE_URL") {
            creds = creds.with_base_url(base_url);
        }

        creds.validate()?;
        Ok(creds)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the key is non-empty and the base URL parses.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API key must not be empty".to_string(),
            )));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}
