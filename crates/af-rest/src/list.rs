//! Lists: a collection of people, organizations or opportunities.

use serde::{Deserialize, Serialize};

use crate::types::EntityType;

/// A list, the Affinity equivalent of a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct List {
    pub id: u64,
    /// Entity type held by the list. See [`List::entity_kind`].
    #[serde(rename = "type")]
    pub list_type: i64,
    pub name: String,
    /// True if every user on the team can see the list.
    pub public: bool,
    /// Internal person who created the list.
    pub owner_id: u64,
    /// Number of list entries.
    pub list_size: u64,
}

impl List {
    pub fn entity_kind(&self) -> Option<EntityType> {
        EntityType::from_code(self.list_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_deser() {
        let json = r#"{
            "id": 450,
            "type": 0,
            "name": "Founders",
            "public": false,
            "owner_id": 38706,
            "list_size": 67
        }"#;

        let list: List = serde_json::from_str(json).unwrap();
        assert_eq!(list.id, 450);
        assert_eq!(list.list_type, 0);
        assert_eq!(list.name, "Founders");
        assert!(!list.public);
        assert_eq!(list.owner_id, 38706);
        assert_eq!(list.list_size, 67);
        assert_eq!(list.entity_kind(), Some(EntityType::Person));
    }

    #[test]
    fn test_list_ser_uses_type_key() {
        let list = List {
            id: 1,
            list_type: 1,
            name: "Portfolio".to_string(),
            public: true,
            owner_id: 2,
            list_size: 0,
        };
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["type"], 1);
        assert!(value.get("list_type").is_none());
    }
}
