//! In-Memory Backend
//!
//! Map-backed [`StorageBackend`] used by native tests in place of the
//! extension store.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::backend::StorageBackend;

/// Single-threaded map store, like the browser store it stands in for.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl StorageBackend for MemoryBackend {
    fn set(&self, key: &str, value: String) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    async fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}
