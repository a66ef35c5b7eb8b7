//! List entries: one row of a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A list entry, linking an entity to a list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListEntry {
    pub id: u64,
    pub list_id: u64,
    /// User who created the entry. `null` for entries created by automation.
    pub creator_id: Option<u64>,
    pub entity_id: u64,
    /// Entity-specific details (name, emails, domain, ...).
    #[serde(default)]
    pub entity: serde_json::Value,
    pub created_at: String,
}

impl ListEntry {
    /// `created_at` as a UTC timestamp, if it parses.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        crate::types::parse_timestamp(&self.created_at)
    }
}
