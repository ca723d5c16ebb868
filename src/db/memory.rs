use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use super::{ItemStore, StoreError};
use crate::models::Item;

/// In-process items table with serial ids, used to drive the router in tests
#[derive(Default)]
pub struct MemoryItemStore {
    inner: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Item>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.rows.len()
    }
}

// Surfaces the way a server-side error from Postgres would
fn rejected(message: String) -> StoreError {
    StoreError::Database(sqlx::Error::Protocol(message))
}

// Mirrors the int4 cast applied to ids in the SQL statements
fn parse_id(id: &str) -> Result<i32, StoreError> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| rejected(format!("invalid input syntax for type integer: \"{id}\"")))
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn find_item(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn insert_item(&self, name: Option<&str>) -> Result<Item, StoreError> {
        let name = name.ok_or_else(|| {
            rejected("null value in column \"name\" violates not-null constraint".to_string())
        })?;
        let mut table = self.inner.lock().await;
        table.last_id += 1;
        let item = Item {
            id: table.last_id,
            name: name.to_string(),
        };
        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &str, name: &str) -> Result<Option<Item>, StoreError> {
        let id = parse_id(id)?;
        let mut table = self.inner.lock().await;
        Ok(table.rows.get_mut(&id).map(|item| {
            item.name = name.to_string();
            item.clone()
        }))
    }

    async fn delete_item(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.inner.lock().await.rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_serial_and_never_reused() {
        let store = MemoryItemStore::new();
        let first = store.insert_item(Some("a")).await.unwrap();
        let second = store.insert_item(Some("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        store.delete_item("2").await.unwrap();
        let third = store.insert_item(Some("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_rejects_like_postgres() {
        let store = MemoryItemStore::new();
        assert!(matches!(store.find_item("abc").await, Err(StoreError::Database(_))));
        assert!(matches!(store.insert_item(None).await, Err(StoreError::Database(_))));
        assert_eq!(store.len().await, 0);
    }
}
