//! Item List Repository
//!
//! Typed access to the single stored item-list record. Every mutation
//! is a read-modify-write of the whole list with no locking or
//! versioning: if two mutations race, the later write wins and the
//! earlier one is lost. The popup runs on a single-threaded event loop
//! and serializes user actions, so this never happens in practice.

use std::rc::Rc;

use crate::codec::{decode_record, encode_record, Decoded};
use crate::domain::{DomainError, DomainResult, Item};

use super::backend::StorageBackend;
use super::ITEM_LIST_KEY;

pub struct ItemRepository<B: StorageBackend> {
    backend: Rc<B>,
}

impl<B: StorageBackend> ItemRepository<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self { backend }
    }

    /// Load the full item list.
    ///
    /// Absent and unreadable records both read as the empty list, so
    /// first launch and a corrupted store look the same to callers.
    pub async fn list(&self) -> Vec<Item> {
        let raw = self.backend.get(ITEM_LIST_KEY).await;
        match decode_record(raw.as_deref()) {
            Decoded::Parsed(items) => items,
            Decoded::Missing => Vec::new(),
            Decoded::Corrupt(e) => {
                log::warn!("item list record is unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `items`.
    pub fn save_list(&self, items: &[Item]) {
        self.backend.set(ITEM_LIST_KEY, encode_record(&items));
    }

    /// Append `item` at the end of the list.
    pub async fn append(&self, item: Item) {
        let mut items = self.list().await;
        items.push(item);
        self.save_list(&items);
    }

    /// Remove the item at `index`.
    ///
    /// Out-of-range indices leave the list untouched.
    pub async fn remove_at(&self, index: usize) {
        let mut items = self.list().await;
        if index < items.len() {
            items.remove(index);
            self.save_list(&items);
        }
    }

    /// Replace the item at `index` with `item`.
    ///
    /// Out-of-range indices fail without writing anything.
    pub async fn replace_at(&self, index: usize, item: Item) -> DomainResult<()> {
        let mut items = self.list().await;
        if index >= items.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items[index] = item;
        self.save_list(&items);
        Ok(())
    }
}
