//! Field values: the data in one spreadsheet cell.

use affinity_client::FormBody;
use serde::{Deserialize, Serialize};

/// A field value attached to a person, organization, opportunity or list entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldValue {
    #[serde(alias = "field_value_id")]
    pub id: u64,
    pub field_id: u64,
    pub entity_id: u64,
    /// `None` for values on global fields.
    #[serde(default)]
    pub list_entry_id: Option<u64>,
    /// Shape depends on the field's `value_type`.
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Filter for [`get_field_values`](crate::AffinityRestClient::get_field_values).
///
/// At least one filter must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValueQuery {
    pub person_id: Option<u64>,
    pub organization_id: Option<u64>,
    pub opportunity_id: Option<u64>,
    pub list_entry_id: Option<u64>,
}

impl FieldValueQuery {
    pub fn person(id: u64) -> Self {
        Self {
            person_id: Some(id),
            ..Self::default()
        }
    }

    pub fn organization(id: u64) -> Self {
        Self {
            organization_id: Some(id),
            ..Self::default()
        }
    }

    pub fn opportunity(id: u64) -> Self {
        Self {
            opportunity_id: Some(id),
            ..Self::default()
        }
    }

    pub fn list_entry(id: u64) -> Self {
        Self {
            list_entry_id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_list_entry(mut self, id: u64) -> Self {
        self.list_entry_id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.person_id.is_none()
            && self.organization_id.is_none()
            && self.opportunity_id.is_none()
            && self.list_entry_id.is_none()
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("person_id", self.person_id.map(|v| v.to_string())),
            ("organization_id", self.organization_id.map(|v| v.to_string())),
            ("opportunity_id", self.opportunity_id.map(|v| v.to_string())),
            ("list_entry_id", self.list_entry_id.map(|v| v.to_string())),
        ]
    }
}

/// Payload for creating a field value.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFieldValue {
    pub field_id: u64,
    pub entity_id: u64,
    /// Required when the field is list-specific.
    pub list_entry_id: Option<u64>,
    pub value: serde_json::Value,
}

impl NewFieldValue {
    pub(crate) fn to_form(&self) -> FormBody {
        FormBody::new()
            .field("field_id", self.field_id)
            .field("entity_id", self.entity_id)
            .field_opt("list_entry_id", self.list_entry_id)
            .json_value("value", &self.value)
    }
}
