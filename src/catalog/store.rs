// src/catalog/store.rs
// In-memory item store

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::{CatalogError, Result};
use super::{Item, ItemId};

/// Insert-only map from identifier to item.
///
/// Items are never replaced or removed once stored. Readers get clones.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items`; later duplicates are ignored.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut map = HashMap::new();
        for item in items {
            map.entry(item.id).or_insert(item);
        }
        Self {
            items: RwLock::new(map),
        }
    }

    /// Store holding the startup seed data
    pub fn seeded() -> Self {
        Self::with_items(super::seed_items())
    }

    pub async fn get(&self, id: ItemId) -> Result<Item> {
        let items = self.items.read().await;
        match items.get(&id) {
            Some(item) => {
                debug!("Item {} found", id);
                Ok(item.clone())
            }
            None => {
                debug!("Item {} not found", id);
                Err(CatalogError::NotFound(id))
            }
        }
    }

    /// Insert a new item, failing if the identifier is taken.
    ///
    /// The lookup and the insert happen under one write lock.
    pub async fn insert(&self, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            warn!("Rejected duplicate item id {}", item.id);
            return Err(CatalogError::Conflict(item.id));
        }

        items.insert(item.id, item.clone());
        info!("Created item {} ({})", item.id, item.name);
        Ok(item)
    }

    pub async fn contains(&self, id: ItemId) -> bool {
        self.items.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}
