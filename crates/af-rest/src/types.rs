//! Types shared across resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of entity a list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Person,
    Organization,
    Opportunity,
}

impl EntityType {
    /// Map the numeric `type` used by lists.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(EntityType::Person),
            1 => Some(EntityType::Organization),
            8 => Some(EntityType::Opportunity),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            EntityType::Person => 0,
            EntityType::Organization => 1,
            EntityType::Opportunity => 8,
        }
    }
}

/// Result of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteResult {
    pub success: bool,
}

/// Parse an Affinity timestamp. Accepts RFC 3339 and `2017-01-16 16:17:38 -0800`.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
