//! Persons: contacts of your team.

use affinity_client::FormBody;
use serde::{Deserialize, Serialize};

use crate::list_entry::ListEntry;

/// A person, either external (`type` 0) or internal (`type` 1) to your team.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub person_type: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    /// The email most likely to be current, computed by Affinity.
    #[serde(default)]
    pub primary_email: Option<String>,
    #[serde(default)]
    pub organization_ids: Vec<u64>,
    /// Only returned by the single-person endpoint.
    #[serde(default)]
    pub list_entries: Vec<ListEntry>,
}

impl Person {
    pub fn is_internal(&self) -> bool {
        self.person_type == 1
    }
}

/// One page of person search results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PersonSearchResult {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Payload for creating a person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub organization_ids: Vec<u64>,
}

impl NewPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    pub fn phone_number(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(number.into());
        self
    }

    pub fn organization(mut self, id: u64) -> Self {
        self.organization_ids.push(id);
        self
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .array("emails", &self.emails)
            .array("phone_numbers", &self.phone_numbers)
            .array("organization_ids", &self.organization_ids)
    }
}

/// Changes to an existing person. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub emails: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub organization_ids: Option<Vec<u64>>,
}

impl PersonUpdate {
    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field_opt("first_name", self.first_name.as_deref())
            .field_opt("last_name", self.last_name.as_deref())
            .array_opt("emails", self.emails.as_deref())
            .array_opt("phone_numbers", self.phone_numbers.as_deref())
            .array_opt("organization_ids", self.organization_ids.as_deref())
    }
}
