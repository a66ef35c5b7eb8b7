//! Opportunities: deals tracked through a pipeline list.

use affinity_client::FormBody;
use serde::{Deserialize, Serialize};

use crate::list_entry::ListEntry;

/// An opportunity, a potential sale or deal linking people and organizations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Opportunity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub person_ids: Vec<u64>,
    #[serde(default)]
    pub organization_ids: Vec<u64>,
    #[serde(default)]
    pub list_entries: Vec<ListEntry>,
}

/// One page of opportunity search results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OpportunitySearchResult {
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Payload for creating an opportunity.
///
/// Every opportunity lives on exactly one list, so `list_id` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOpportunity {
    pub name: String,
    pub list_id: u64,
    pub person_ids: Vec<u64>,
    pub organization_ids: Vec<u64>,
}

impl NewOpportunity {
    pub fn new(name: impl Into<String>, list_id: u64) -> Self {
        Self {
            name: name.into(),
            list_id,
            ..Self::default()
        }
    }

    pub fn person(mut self, id: u64) -> Self {
        self.person_ids.push(id);
        self
    }

    pub fn organization(mut self, id: u64) -> Self {
        self.organization_ids.push(id);
        self
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field("name", &self.name)
            .field("list_id", self.list_id)
            .array("person_ids", &self.person_ids)
            .array("organization_ids", &self.organization_ids)
    }
}

/// Changes to an existing opportunity. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityUpdate {
    pub name: Option<String>,
    pub person_ids: Option<Vec<u64>>,
    pub organization_ids: Option<Vec<u64>>,
}

impl OpportunityUpdate {
    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field_opt("name", self.name.as_deref())
            .array_opt("person_ids", self.person_ids.as_deref())
            .array_opt("organization_ids", self.organization_ids.as_deref())
    }
}
