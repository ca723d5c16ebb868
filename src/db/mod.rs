pub mod dbitems;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Item;

/// Failure while running a statement against the items table
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for items.
///
/// Every method issues exactly one statement. Ids are passed through as the
/// caller sent them; rejecting malformed ids is left to the storage engine.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All rows, in whatever order storage returns them
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    /// The item with the given id, or `None`
    async fn find_item(&self, id: &str) -> Result<Option<Item>, StoreError>;

    /// Insert a row and return it with its assigned id
    async fn insert_item(&self, name: Option<&str>) -> Result<Item, StoreError>;

    /// Rename an item, returning the updated row or `None` if absent
    async fn update_item(&self, id: &str, name: &str) -> Result<Option<Item>, StoreError>;

    /// Delete an item, returning the removed row or `None` if absent
    async fn delete_item(&self, id: &str) -> Result<Option<Item>, StoreError>;

    /// Check that storage is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Store handle shared by every request handler
pub type SharedStore = std::sync::Arc<dyn ItemStore>;
