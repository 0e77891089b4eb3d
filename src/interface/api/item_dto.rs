//! Item API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Item response DTO
///
/// The wire object carries exactly id/name/description; the entity's
/// timestamps stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Create/update item request
#[derive(Debug, Deserialize, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Convert domain Item to ItemResponse
impl From<crate::domain::item::Item> for ItemResponse {
    fn from(item: crate::domain::item::Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// Convert ItemPayload to domain NewItem
impl From<ItemPayload> for crate::domain::item::NewItem {
    fn from(req: ItemPayload) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}
