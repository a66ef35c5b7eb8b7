//! # af-client
//!
//! Core HTTP client infrastructure for the Affinity CRM API.
//!
//! This crate provides the foundational HTTP layer with:
//! - HTTP Basic authentication (empty username, API key as password)
//! - Form-encoded request bodies with `name[]` array fields
//! - A single success classification point ([`SuccessPolicy`])
//! - Typed errors carrying the status code and response body
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (af-rest: lists, persons, organizations, ...)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AffinityClient                           │
//! │  - Holds credentials + HTTP client                          │
//! │  - Provides typed JSON methods (get_json, post_form, etc.)  │
//! │  - Handles the Basic auth header                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AfHttpClient                             │
//! │  - Raw HTTP, one round trip per call                        │
//! │  - Status classification and failure logging                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use affinity_client::{AffinityClient, AffinityCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), affinity_client::Error> {
//!     let creds = AffinityCredentials::from_env()?;
//!     let client = AffinityClient::new(creds)?;
//!
//!     let lists: serde_json::Value = client.get_json("/lists").await?;
//!     Ok(())
//! }
//! ```

mod affinity_client;
mod client;
mod config;
mod credentials;
mod error;
mod request;
mod response;

pub use affinity_client::AffinityClient;
pub use client::AfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, SuccessPolicy};
pub use credentials::AffinityCredentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{FormBody, RequestBuilder, RequestMethod};
pub use response::Response;

/// Default Affinity API host.
pub const DEFAULT_BASE_URL: &str = "https://api.affinity.vc";

/// Documented daily call quota for an Affinity team. Not enforced client-side.
pub const DAILY_RATE_LIMIT: u32 = 150_000;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("affinity-api/", env!("CARGO_PKG_VERSION"));
