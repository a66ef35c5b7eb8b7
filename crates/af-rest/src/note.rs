//! Notes attached to people, organizations and opportunities.

use affinity_client::FormBody;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
    #[serde(alias = "note_id")]
    pub id: u64,
    pub creator_id: u64,
    #[serde(default)]
    pub person_ids: Vec<u64>,
    #[serde(default)]
    pub organization_ids: Vec<u64>,
    #[serde(default)]
    pub opportunity_ids: Vec<u64>,
    pub content: String,
    pub created_at: String,
}

impl Note {
    /// `created_at` as a UTC timestamp, if it parses.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        crate::types::parse_timestamp(&self.created_at)
    }
}

/// Payload for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
    pub person_ids: Vec<u64>,
    pub organization_ids: Vec<u64>,
    pub opportunity_ids: Vec<u64>,
    /// Attach the note to a Gmail message instead of plain content.
    pub gmail_id: Option<String>,
    /// Internal person to credit as author. Defaults to the API key owner.
    pub creator_id: Option<u64>,
}

impl NewNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
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

    pub fn opportunity(mut self, id: u64) -> Self {
        self.opportunity_ids.push(id);
        self
    }

    /// Attach the note to a Gmail message.
    pub fn gmail_id(mut self, id: impl Into<String>) -> Self {
        self.gmail_id = Some(id.into());
        self
    }

    pub fn creator(mut self, id: u64) -> Self {
        self.creator_id = Some(id);
        self
    }

    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .array("person_ids", &self.person_ids)
            .array("organization_ids", &self.organization_ids)
            .array("opportunity_ids", &self.opportunity_ids)
            .field("content", &self.content)
            .field_opt("gmail_id", self.gmail_id.as_deref())
            .field_opt("creator_id", self.creator_id)
    }
}
