//! Item repository interface

use super::entity::{Item, NewItem};
use crate::domain::shared::error::Result;
use async_trait::async_trait;

/// Item repository trait
///
/// `update` and `delete` return the affected row (`None` when the id does
/// not exist) so the API can echo it back to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new item
    async fn create(&self, data: NewItem) -> Result<Item>;

    /// Find item by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Item>>;

    /// List items; an absent limit returns every row
    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Item>>;

    /// Update an item
    async fn update(&self, id: i32, data: NewItem) -> Result<Option<Item>>;

    /// Delete an item, returning the deleted row
    async fn delete(&self, id: i32) -> Result<Option<Item>>;
}
