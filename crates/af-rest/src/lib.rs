//! # af-rest
//!
//! Typed client for the Affinity CRM REST API.
//!
//! ## Resources
//!
//! - **Lists** - List metadata and list entries
//! - **Fields / Field values** - Custom field definitions and their values
//! - **Persons** - Search, CRUD and global person fields
//! - **Organizations** - Search, CRUD and global organization fields
//! - **Opportunities** - Search and CRUD
//! - **Notes** - Note creation
//! - **Relationship strengths** - Strength between an internal and external person
//!
//! ## Example
//!
//! ```rust,ignore
//! use affinity_rest::{AffinityRestClient, NewNote, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), affinity_rest::Error> {
//!     let client = AffinityRestClient::from_env()?;
//!
//!     let lists = client.get_all_lists().await?;
//!     for list in &lists {
//!         println!("{} ({} entries)", list.name, list.list_size);
//!     }
//!
//!     let page = client
//!         .search_organizations("acme", SearchOptions::default())
//!         .await?;
//!     if let Some(org) = page.organizations.first() {
//!         client
//!             .create_note(&NewNote::new("Intro call").organization(org.id))
//!             .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod field;
mod field_value;
mod list;
mod list_entry;
mod note;
mod opportunity;
mod organization;
mod person;
mod relationship_strength;
mod search;
mod types;

pub use client::AffinityRestClient;
pub use error::{Error, ErrorKind, Result};
pub use field::{DropdownOption, Field};
pub use field_value::{FieldValue, FieldValueQuery, NewFieldValue};
pub use list::List;
pub use list_entry::ListEntry;
pub use note::{NewNote, Note};
pub use opportunity::{NewOpportunity, Opportunity, OpportunitySearchResult, OpportunityUpdate};
pub use organization::{
    NewOrganization, Organization, OrganizationSearchResult, OrganizationUpdate,
};
pub use person::{NewPerson, Person, PersonSearchResult, PersonUpdate};
pub use relationship_strength::RelationshipStrength;
pub use search::SearchOptions;
pub use types::{DeleteResult, EntityType};

// Re-export the connection types callers need to build a client
pub use affinity_client::{AffinityCredentials, ClientConfig, ClientConfigBuilder, SuccessPolicy};
