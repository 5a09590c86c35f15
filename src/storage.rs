//! Storage Operations
//!
//! Typed wrappers over the repositories, bound to the extension store.

use std::rc::Rc;

use auto_search_core::{ExportBundle, Item, ItemRepository, Setting, SettingRepository};

use crate::chrome::ChromeStorage;

fn item_repo() -> ItemRepository<ChromeStorage> {
    ItemRepository::new(Rc::new(ChromeStorage))
}

fn setting_repo() -> SettingRepository<ChromeStorage> {
    SettingRepository::new(Rc::new(ChromeStorage))
}

pub async fn item_list() -> Vec<Item> {
    item_repo().list().await
}

pub async fn add_item(item: Item) {
    item_repo().append(item).await
}

pub async fn remove_item(index: usize) {
    item_repo().remove_at(index).await
}

pub async fn update_item(index: usize, item: Item) -> Result<(), String> {
    item_repo()
        .replace_at(index, item)
        .await
        .map_err(|e| e.to_string())
}

pub async fn setting() -> Setting {
    setting_repo().load().await
}

pub fn save_setting(setting: &Setting) {
    setting_repo().save(setting)
}

/// Both records bundled as pretty-printed JSON for download.
pub async fn export_json() -> String {
    let bundle = ExportBundle {
        items: item_repo().list().await,
        setting: setting_repo().load().await,
    };
    bundle.to_json_pretty()
}

/// Parse an exported bundle and overwrite both records.
///
/// Nothing is written unless the whole file parses.
pub fn import_json(raw: &str) -> Result<(), String> {
    let bundle =
        ExportBundle::from_json(raw).map_err(|e| format!("Invalid settings file: {}", e))?;
    item_repo().save_list(&bundle.items);
    setting_repo().save(&bundle.setting);
    Ok(())
}
