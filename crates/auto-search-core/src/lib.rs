//! Auto-Search Core
//!
//! Layered library behind the popup and the content script:
//! - domain: records the extension persists and exchanges
//! - codec: explicit decoding of stored records
//! - storage: key-value backend trait plus typed repositories
//! - fill: the data-only message the popup sends into the page

mod codec;
mod domain;
mod fill;
mod storage;

pub use codec::{decode_record, encode_record, Decoded};
pub use domain::{
    name_taken, DomainError, DomainResult, ExportBundle, Item, Setting, EXPORT_FILENAME,
};
pub use fill::{FillRequest, FILL_REQUEST_KIND};
pub use storage::{
    ItemRepository, MemoryBackend, SettingRepository, StorageBackend, ITEM_LIST_KEY, SETTING_KEY,
};
