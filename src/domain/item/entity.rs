//! Item entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item entity
///
/// Timestamps are written by the persistence layer and never cross the
/// HTTP boundary; the wire object carries id/name/description only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item creation/update data
///
/// Create and update share the same payload, so one struct covers both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_all_fields() {
        let item = Item {
            id: 1,
            name: "widget".to_string(),
            description: "a widget".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "widget");
        assert_eq!(json["description"], "a widget");
    }
}
