//! High-level Affinity client with typed HTTP methods.
//!
//! This module provides `AffinityClient`, which combines credentials with
//! an HTTP client and provides typed JSON methods for API interactions.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - The API key is never recorded in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::AfHttpClient;
use crate::config::ClientConfig;
use crate::credentials::AffinityCredentials;
use crate::error::Result;
use crate::request::{FormBody, RequestBuilder, RequestMethod};

/// High-level Affinity API client.
///
/// Every request carries HTTP Basic auth with an empty username and the API
/// key as password. Body-less requests also carry
/// `Content-Type: application/json`.
///
/// # Example
///
/// ```rust,ignore
/// use affinity_client::{AffinityClient, AffinityCredentials, FormBody};
///
/// let client = AffinityClient::new(AffinityCredentials::new("my-key"))?;
///
/// let person: serde_json::Value = client.get_json("/persons/38706").await?;
///
/// let created: serde_json::Value = client
///     .post_form("/lists/7/list-entries", FormBody::new().field("entity_id", 100))
///     .await?;
/// ```
#[derive(Clone)]
pub struct AffinityClient {
    http: AfHttpClient,
    credentials: AffinityCredentials,
}

impl std::fmt::Debug for AffinityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffinityClient")
            .field("base_url", &self.credentials.base_url())
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl AffinityClient {
    /// Create a new client with default HTTP configuration.
    pub fn new(credentials: AffinityCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(credentials: AffinityCredentials, config: ClientConfig) -> Result<Self> {
        credentials.validate()?;
        let http = AfHttpClient::new(config)?;
        Ok(Self { http, credentials })
    }

    /// Get the base endpoint URL.
    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    /// Get the HTTP configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Build the full URL for a resource path.
    ///
    /// Leading slashes on `path` are normalised so `"lists"` and `"/lists"`
    /// produce the same URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.credentials.base_url(),
                path.trim_start_matches('/')
            )
        }
    }

    /// Create an authenticated request builder for `path`.
    pub fn request(&self, method: RequestMethod, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.url(path))
            .basic_auth("", self.credentials.api_key())
            .header("Content-Type", "application/json")
    }

    // =========================================================================
    // JSON verbs
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(RequestMethod::Get, path);
        self.http.send_json(request).await
    }

    /// GET request with query parameters. Parameters with a `None` value are
    /// left out.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<T> {
        let mut request = self.request(RequestMethod::Get, path);
        for (name, value) in query {
            request = request.query_opt(name, value.as_deref());
        }
        self.http.send_json(request).await
    }

    /// POST request with a form body and JSON response.
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormBody) -> Result<T> {
        let request = self.request(RequestMethod::Post, path).form(form);
        self.http.send_json(request).await
    }

    /// PUT request with a form body and JSON response.
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn put_form<T: DeserializeOwned>(&self, path: &str, form: FormBody) -> Result<T> {
        let request = self.request(RequestMethod::Put, path).form(form);
        self.http.send_json(request).await
    }

    /// DELETE request with JSON response.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(RequestMethod::Delete, path);
        self.http.send_json(request).await
    }
}
