//! Fields: a column definition, either list-specific or global.

use serde::{Deserialize, Serialize};

/// A field, the Affinity equivalent of a spreadsheet column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Field {
    #[serde(alias = "field_id")]
    pub id: u64,
    pub name: String,
    /// Set for list-specific fields, `None` for global ones.
    #[serde(default)]
    pub list_id: Option<u64>,
    /// Whether a single cell may hold several values.
    pub allows_multiple: bool,
    /// Options for ranked dropdown fields.
    #[serde(default)]
    pub dropdown_options: Vec<DropdownOption>,
    /// Kind of value the field accepts.
    pub value_type: i64,
}

/// One option of a ranked dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DropdownOption {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub color: Option<i64>,
}
