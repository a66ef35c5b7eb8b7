//! Organizations: external companies your team is in touch with.

use affinity_client::FormBody;
use serde::{Deserialize, Serialize};

use crate::list_entry::ListEntry;

/// An organization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    /// Website domain, if known.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub person_ids: Vec<u64>,
    /// Whether the organization is part of Affinity's global dataset.
    #[serde(default)]
    pub global: bool,
    /// Only returned by the single-organization endpoint.
    #[serde(default)]
    pub list_entries: Vec<ListEntry>,
}

/// One page of organization search results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrganizationSearchResult {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Payload for creating an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOrganization {
    pub name: String,
    pub domain: Option<String>,
    pub person_ids: Vec<u64>,
}

impl NewOrganization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn person(mut self, id: u64) -> Self {
        self.person_ids.push(id);
        self
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field("name", &self.name)
            .field_opt("domain", self.domain.as_deref())
            .array("person_ids", &self.person_ids)
    }
}

/// Changes to an existing organization. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub person_ids: Option<Vec<u64>>,
}

impl OrganizationUpdate {
    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field_opt("name", self.name.as_deref())
            .field_opt("domain", self.domain.as_deref())
            .array_opt("person_ids", self.person_ids.as_deref())
    }
}
