//! Storage Layer - Backend Trait
//!
//! Abstract interface over the raw key/value store.
//! Implementations wrap the extension store in the popup and a plain
//! map in tests.

use async_trait::async_trait;

/// Raw string key/value store.
///
/// Futures here are `!Send`: the extension backend holds JS handles
/// that never leave the single browser thread.
#[async_trait(?Send)]
pub trait StorageBackend {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Fire-and-forget: the write is handed to the store without
    /// waiting for completion, and concurrent writers resolve by
    /// last-write-wins.
    fn set(&self, key: &str, value: String);

    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;
}
