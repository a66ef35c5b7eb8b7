//! Relationship strength between an internal and an external person.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RelationshipStrength {
    pub internal_id: u64,
    pub external_id: u64,
    pub strength: f64,
}
