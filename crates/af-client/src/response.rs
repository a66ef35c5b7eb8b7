//! HTTP response handling.

use serde::de::DeserializeOwned;

use crate::config::SuccessPolicy;
use crate::error::{Error, ErrorKind, Result};

const MAX_LOGGED_BODY: usize = 500;

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// The body is read as text first so a malformed payload surfaces as
    /// [`ErrorKind::Json`] with the serde message.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let text = self.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Classify the status against `policy`.
    ///
    /// On failure the status and body are logged at `warn` and returned as
    /// [`ErrorKind::Api`].
    pub async fn check_status(self, policy: SuccessPolicy) -> Result<Response> {
        let status = self.status();
        if policy.is_success(status) {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        tracing::warn!(
            status,
            body = %truncate_body(&body),
            "Affinity API request failed"
        );
        Err(Error::new(ErrorKind::Api { status, body }))
    }
}

/// Shorten a response body for log output.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY {
        return body.to_string();
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
