//! Storage Access Layer
//!
//! Typed repositories over a raw key/value backend. All persistent
//! state lives in two fixed records: the item list and the setting.

mod backend;
mod item_repo;
mod memory;
mod setting_repo;

#[cfg(test)]
mod tests;

/// Record key holding the serialized item list.
pub const ITEM_LIST_KEY: &str = "AUTO_SEARCH_STORAGE_ITEMS";

/// Record key holding the serialized setting object.
pub const SETTING_KEY: &str = "AUTO_SEARCH_STORAGE_SETTINGS";

pub use backend::StorageBackend;
pub use item_repo::ItemRepository;
pub use memory::MemoryBackend;
pub use setting_repo::SettingRepository;
