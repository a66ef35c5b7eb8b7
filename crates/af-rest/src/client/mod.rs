//! Affinity REST API client.
//!
//! This client wraps `AffinityClient` from `af-client` and provides typed
//! methods for every resource: lists, list entries, fields, field values,
//! persons, organizations, opportunities, notes and relationship strengths.

use affinity_client::{AffinityClient, AffinityCredentials, ClientConfig};

use crate::error::{Error, ErrorKind, Result};

mod field_values;
mod list_entries;
mod lists;
mod notes;
mod opportunities;
mod organizations;
mod persons;
mod relationship_strengths;

/// Affinity REST API client.
///
/// Each method sends exactly one request and returns the typed record, or an
/// [`Error`] carrying the status code and body when the server did not
/// answer with success.
///
/// # Example
///
/// ```rust,ignore
/// use affinity_rest::{AffinityRestClient, NewPerson, SearchOptions};
///
/// let client = AffinityRestClient::new("my-api-key")?;
///
/// let page = client.search_persons("jane", SearchOptions::new().page_size(50)).await?;
/// let person = client.get_person(page.persons[0].id).await?;
///
/// let created = client
///     .create_person(&NewPerson::new("Ada", "Lovelace").email("ada@example.com"))
///     .await?;
/// client.delete_person(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AffinityRestClient {
    client: AffinityClient,
}

impl AffinityRestClient {
    /// Create a new REST client against the default Affinity host.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_credentials(AffinityCredentials::new(api_key))
    }

    /// Create a new REST client from explicit credentials.
    pub fn with_credentials(credentials: AffinityCredentials) -> Result<Self> {
        let client = AffinityClient::new(credentials)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(credentials: AffinityCredentials, config: ClientConfig) -> Result<Self> {
        let client = AffinityClient::with_config(credentials, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from `AFFINITY_API_KEY` / `AFFINITY_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_credentials(AffinityCredentials::from_env()?)
    }

    /// Create a REST client from an existing AffinityClient.
    pub fn from_client(client: AffinityClient) -> Self {
        Self { client }
    }

    /// Get the underlying AffinityClient.
    pub fn inner(&self) -> &AffinityClient {
        &self.client
    }

    /// Get the base endpoint URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Reject a call before any request is sent, logging the usage line.
pub(crate) fn usage_error(usage: &str) -> Error {
    tracing::warn!(usage, "Missing required argument");
    Error::new(ErrorKind::InvalidInput(format!("Usage: {}", usage)))
}

/// Validate a search term. Blank terms are rejected; others pass through unchanged.
pub(crate) fn require_term<'a>(term: &'a str, usage: &str) -> Result<&'a str> {
    if term.trim().is_empty() {
        return Err(usage_error(usage));
    }
    Ok(term)
}
