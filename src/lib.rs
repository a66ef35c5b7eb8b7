//! # affinity-api
//!
//! An Affinity CRM API client library for Rust.
//!
//! Every call sends exactly one authenticated HTTPS request and returns a
//! typed record, or an error carrying the HTTP status and response body.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Tracing spans never record the API key
//!
//! ## Crates
//!
//! - **affinity-client** - Core HTTP layer: Basic auth, form bodies, status classification
//! - **affinity-rest** - Typed resources: lists, list entries, fields, field values,
//!   persons, organizations, opportunities, notes, relationship strengths
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use affinity_api::{AffinityCredentials, AffinityRestClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads AFFINITY_API_KEY (and optionally AFFINITY_BASE_URL)
//!     let client = AffinityRestClient::with_credentials(AffinityCredentials::from_env()?)?;
//!
//!     let page = client
//!         .search_persons("jane", SearchOptions::new().page_size(10))
//!         .await?;
//!
//!     for person in page.persons {
//!         println!("{} {}", person.first_name, person.last_name.unwrap_or_default());
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use affinity_client as client;
#[cfg(feature = "rest")]
pub use affinity_rest as rest;

// Commonly used types at the top level
#[cfg(feature = "client")]
pub use affinity_client::{AffinityClient, AffinityCredentials, ClientConfig, SuccessPolicy};
#[cfg(feature = "rest")]
pub use affinity_rest::AffinityRestClient;
