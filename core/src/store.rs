//! The item store: the `ItemRepository` seam and its in-memory backend.
//!
//! # Design
//! Handlers receive an `Arc<dyn ItemRepository>` rather than reaching for a
//! process-wide list, so tests build a fresh store each time and another
//! backend can be slotted in later.
//!
//! `InMemoryItemStore` keeps the collection behind a `tokio::sync::RwLock`.
//! Each mutation performs its checks and its write under one write guard, so
//! two requests can never both pass a uniqueness or existence check against
//! the same state. `list` takes the read guard and sees a whole snapshot.
//!
//! Ids come from a counter that only moves forward, so an id is never handed
//! out twice even after the item that held it is deleted.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{SeedError, StoreError, StoreResult};
use crate::types::{Item, ItemFilter, ItemId};

/// Query and mutation operations over the item collection.
///
/// Absent inputs are passed as `None` so that the store, not the transport,
/// decides how a missing field is reported.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Items matching `filter`, in insertion order. Never fails.
    async fn list(&self, filter: Option<ItemFilter>) -> Vec<Item>;

    /// Append a new item and return it with its assigned id.
    async fn add(&self, name: Option<String>) -> StoreResult<Item>;

    /// Rename the item with `id` in place and return the updated item.
    ///
    /// Checks run in a fixed order: missing id, missing name, name taken by
    /// another item, unknown id.
    async fn update(&self, id: Option<ItemId>, name: Option<String>) -> StoreResult<Item>;

    /// Remove the item with `id` and return it.
    async fn delete(&self, id: Option<ItemId>) -> StoreResult<Item>;
}

#[derive(Debug, Default)]
struct Collection {
    items: Vec<Item>,
    last_id: i64,
}

impl Collection {
    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn name_taken(&self, name: &str, except: Option<ItemId>) -> bool {
        self.items
            .iter()
            .any(|item| item.name == name && Some(item.id) != except)
    }

    fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId(self.last_id)
    }

    fn list(&self, filter: Option<&ItemFilter>) -> Vec<Item> {
        match filter {
            Some(filter) => self
                .items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect(),
            None => self.items.clone(),
        }
    }

    fn add(&mut self, name: Option<String>) -> StoreResult<Item> {
        let name = name.ok_or(StoreError::MissingName)?;
        if name.trim().is_empty() {
            return Err(StoreError::BlankName);
        }
        if self.name_taken(&name, None) {
            return Err(StoreError::AlreadyExists { name });
        }

        let item = Item {
            id: self.next_id(),
            name,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    fn update(&mut self, id: Option<ItemId>, name: Option<String>) -> StoreResult<Item> {
        let id = id.ok_or(StoreError::MissingId)?;
        let name = name.ok_or(StoreError::MissingName)?;
        if self.name_taken(&name, Some(id)) {
            return Err(StoreError::AlreadyExists { name });
        }

        let index = self.position(id).ok_or(StoreError::NotFound { id })?;
        let item = &mut self.items[index];
        item.name = name;
        Ok(item.clone())
    }

    fn delete(&mut self, id: Option<ItemId>) -> StoreResult<Item> {
        let id = id.ok_or(StoreError::MissingId)?;
        let index = self.position(id).ok_or(StoreError::NotFound { id })?;
        Ok(self.items.remove(index))
    }
}

/// Item collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Collection>,
}

impl InMemoryItemStore {
    /// An empty store. The first id handed out is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `items`, kept in the given order.
    ///
    /// Seed items obey the same rules as added ones: names are non-blank and
    /// unique, ids are unique. Seeded ids must lie in `1..i64::MAX` so the
    /// counter can always continue after the largest one.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Result<Self, SeedError> {
        let mut collection = Collection::default();

        for (index, item) in items.into_iter().enumerate() {
            if item.id.0 < 1 || item.id.0 == i64::MAX {
                return Err(SeedError::IdOutOfRange { index, id: item.id });
            }
            if item.name.trim().is_empty() {
                return Err(SeedError::InvalidItem {
                    index,
                    source: StoreError::BlankName,
                });
            }
            if collection.name_taken(&item.name, None) {
                return Err(SeedError::InvalidItem {
                    index,
                    source: StoreError::AlreadyExists { name: item.name },
                });
            }
            if collection.position(item.id).is_some() {
                return Err(SeedError::DuplicateId { index, id: item.id });
            }
            collection.last_id = collection.last_id.max(item.id.0);
            collection.items.push(item);
        }

        debug!(count = collection.items.len(), "item store seeded");
        Ok(Self {
            inner: RwLock::new(collection),
        })
    }
}

fn log_outcome(operation: &'static str, result: &StoreResult<Item>) {
    match result {
        Ok(item) => debug!(operation, id = %item.id, name = %item.name, "item mutated"),
        Err(err) => warn!(
            operation,
            code = %err.code(),
            field = %err.field(),
            error = %err,
            "mutation rejected"
        ),
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemStore {
    async fn list(&self, filter: Option<ItemFilter>) -> Vec<Item> {
        self.inner.read().await.list(filter.as_ref())
    }

    async fn add(&self, name: Option<String>) -> StoreResult<Item> {
        let result = self.inner.write().await.add(name);
        log_outcome("add", &result);
        result
    }

    async fn update(&self, id: Option<ItemId>, name: Option<String>) -> StoreResult<Item> {
        let result = self.inner.write().await.update(id, name);
        log_outcome("update", &result);
        result
    }

    async fn delete(&self, id: Option<ItemId>) -> StoreResult<Item> {
        let result = self.inner.write().await.delete(id);
        log_outcome("delete", &result);
        result
    }
}
